use primitives::impl_array_wrapper;

impl_array_wrapper!(H264, 33);
impl_array_wrapper!(H520, 65);
