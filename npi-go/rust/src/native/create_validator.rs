use crate::native::{handle_panic_ptr_return, read_json, write_error_out, ERR_INVALID_CONFIG};
use npi::{NpiValidator, ValidatorConfig};
use std::ffi::c_char;
use std::sync::Arc;

/// # Safety
///
/// `config_json` must be null or a valid nul-terminated string, `error_out` must be
/// null or point to writable memory.
///
/// `config_json` is an optional JSON encoded validator config, null uses the defaults.
/// Return value: a validator id to pass to `npi_validate` and release with
/// `npi_delete_validator`, or a negative error code.
#[no_mangle]
pub unsafe extern "C" fn npi_create_validator(
    config_json: *const c_char,
    error_out: *mut *const c_char,
) -> i64 {
    handle_panic_ptr_return(Some(error_out), || {
        let config = if config_json.is_null() {
            ValidatorConfig::default()
        } else {
            match unsafe { read_json::<ValidatorConfig>(config_json) } {
                Ok(config) => config,
                Err(err) => {
                    write_error_out(err.to_string(), error_out);
                    return ERR_INVALID_CONFIG;
                }
            }
        };

        // return a validator id using the object address
        let validator: Arc<NpiValidator> = Arc::new(config.build());
        Arc::into_raw(validator) as usize as i64
    })
}
