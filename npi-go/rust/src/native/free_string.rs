use std::ffi::{c_char, CString};

/// Releases a string previously written to an `error_out` parameter.
#[no_mangle]
pub extern "C" fn npi_free_string(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}
