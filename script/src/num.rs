/// Minimal little-endian encoding used by `CScriptNum`-style integer pushes:
/// the magnitude is packed into as few bytes as possible, with the sign
/// carried in the high bit of the last byte (an extra zero/0x80 byte is
/// appended when that bit would otherwise collide with a data bit).
pub fn serialize_num(value: i64) -> Vec<u8> {
	if value == 0 {
		return Vec::new();
	}

	let negative = value < 0;
	let mut absvalue = if negative { (-value) as u64 } else { value as u64 };
	let mut result = Vec::new();

	while absvalue != 0 {
		result.push((absvalue & 0xff) as u8);
		absvalue >>= 8;
	}

	if result.last().map_or(false, |&b| b & 0x80 != 0) {
		result.push(if negative { 0x80 } else { 0x00 });
	} else if negative {
		let last = result.last_mut().expect("value != 0 implies non-empty result");
		*last |= 0x80;
	}

	result
}
