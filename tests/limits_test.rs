// limits_test.rs - Process-wide property name length limit.
//
// Kept in its own test binary: the limit is global state.

use ferroprop::api::try_compile_property_escape;
use ferroprop::types::*;

#[test]
fn property_name_length_limit() {
    assert_eq!(get_property_name_length_limit(), DEFAULT_PROPERTY_NAME_LENGTH_LIMIT);

    set_property_name_length_limit(8);
    assert_eq!(get_property_name_length_limit(), 8);
    // "gc=Lu" is five bytes, "Script=Greek" twelve
    assert!(try_compile_property_escape(true, r"\p{gc=Lu}").is_ok());
    let err = try_compile_property_escape(true, r"\p{Script=Greek}").unwrap_err();
    assert_eq!(err.code(), PROPERR_TOO_LONG_PROPERTY_NAME);
    assert_eq!(err.to_string(), "invalid property escape: too long property name");

    set_property_name_length_limit(0);
    assert_eq!(get_property_name_length_limit(), DEFAULT_PROPERTY_NAME_LENGTH_LIMIT);
    assert!(try_compile_property_escape(true, r"\p{Script=Greek}").is_ok());
}
