use crate::native::{
    convert_panic_to_go_error, handle_panic_ptr_return, write_error_out, ERR_INVALID_NPI,
};
use npi::{valid, NpiValidator};
use std::ffi::{c_char, CStr};
use std::mem::ManuallyDrop;
use std::sync::Arc;

/// # Safety
///
/// `input` must be null or a valid nul-terminated string.
///
/// Thread Safety: This is safe to call simultaneously from multiple threads.
/// Return value: whether the input is a well formed NPI with a matching check digit.
#[no_mangle]
pub unsafe extern "C" fn npi_valid(input: *const c_char) -> bool {
    if input.is_null() {
        return false;
    }
    convert_panic_to_go_error(|| {
        let text = unsafe { CStr::from_ptr(input).to_string_lossy() };
        valid(text.as_ref())
    })
    .unwrap_or(false)
}

/// # Safety
///
/// `validator_id` must be a live id returned by `npi_create_validator`. `input` must be
/// null or a valid nul-terminated string, `error_out` must be null or point to writable
/// memory.
///
/// Thread Safety: This is safe to call simultaneously from multiple threads with the
/// same validator id.
/// Return value: `0` if the NPI is valid, otherwise a negative error code. When a reason
/// is available it is written to `error_out` and must be released with `npi_free_string`.
#[no_mangle]
pub unsafe extern "C" fn npi_validate(
    validator_id: i64,
    input: *const c_char,
    error_out: *mut *const c_char,
) -> i64 {
    handle_panic_ptr_return(Some(error_out), || {
        // The id stays owned by the caller until `npi_delete_validator`.
        let validator = ManuallyDrop::new(unsafe {
            Arc::from_raw(validator_id as usize as *const NpiValidator)
        });

        if input.is_null() {
            write_error_out("The NPI must not be null".to_string(), error_out);
            return ERR_INVALID_NPI;
        }
        let text = unsafe { CStr::from_ptr(input).to_string_lossy() };

        match validator.validate(text.as_ref()) {
            Ok(_) => 0,
            Err(err) => {
                write_error_out(err.to_string(), error_out);
                ERR_INVALID_NPI
            }
        }
    })
}
