// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Wildcard pattern
    ($result:expr, { _ }) => {
        let _ = $result;
    };

    // Default case - the script must succeed and the projection must equal `$expected`
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] elements, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_elements() {
            let result = run().map(|list| list.to_vec());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] len, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_len() {
            let result = run().map(|list| list.len());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] capacity, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_capacity() {
            let result = run().map(|list| list.capacity());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] debug, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_debug() {
            let result = run().map(|list| format!("{list:?}"));
            assert_case!(result, $expected);
        }
    };

    // Only the success or failure of the script itself.
    ([$($attrs:meta)*] outcome, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_outcome() {
            let result = run().map(|_| ());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name, input and script first, then assertions in any order
//
// `input` seeds a fresh `List<i32>`; `script` runs against it and may bail
// out early with `?`. Each assertion field becomes its own `#[test]`.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        script: |$list:ident| $script:block,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, unused_mut, unused_variables, dead_code)]

            use super::*;
            use once_cell::sync::OnceCell;
            use slotlist::{List, ListError, Sequence};

            fn input() -> &'static [i32] {
                static INPUT_CELL: OnceCell<Vec<i32>> = OnceCell::new();
                INPUT_CELL.get_or_init(|| $input.into_iter().collect())
            }

            fn script($list: &mut List<i32>) -> Result<(), ListError> {
                $script;
                Ok(())
            }

            fn run() -> Result<List<i32>, ListError> {
                let mut list: List<i32> = input().iter().copied().collect();
                script(&mut list)?;
                Ok(list)
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
