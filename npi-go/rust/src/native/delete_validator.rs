use crate::native::convert_panic_to_go_error;
use npi::NpiValidator;
use std::sync::Arc;

/// # Safety
///
/// `validator_id` must come from `npi_create_validator` and must not be used again.
#[no_mangle]
pub unsafe extern "C" fn npi_delete_validator(validator_id: i64) {
    if validator_id <= 0 {
        return;
    }
    let _ = convert_panic_to_go_error(|| {
        let validator = unsafe { Arc::from_raw(validator_id as usize as *const NpiValidator) };
        drop(validator);
    });
}
