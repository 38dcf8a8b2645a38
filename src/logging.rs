//! Logging utilities shared by the components.

use slog::Logger;

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Create a new child logger with a `src` key containing the component name.
    fn new_with_component_name<T>(&self) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new(slog::o!("src" => component_name::<T>()))
    }
}

fn component_name<T>() -> &'static str {
    let complete_name = std::any::type_name::<T>();
    let without_generic = complete_name.split('<').next().unwrap_or(complete_name);
    without_generic.split("::").last().unwrap_or(complete_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestStruct;

    struct TestStructWithGeneric<T> {
        _phantom: std::marker::PhantomData<T>,
    }

    mod test_mod {
        pub struct ScopedTestStruct;
    }

    #[test]
    fn component_name_is_the_unqualified_type_name() {
        assert_eq!("TestStruct", component_name::<TestStruct>());
        assert_eq!(
            "ScopedTestStruct",
            component_name::<test_mod::ScopedTestStruct>()
        );
    }

    #[test]
    fn component_name_strips_generic_parameters() {
        assert_eq!(
            "TestStructWithGeneric",
            component_name::<TestStructWithGeneric<TestStruct>>()
        );
    }
}
