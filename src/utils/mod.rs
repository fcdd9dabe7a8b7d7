//! Small shared utilities

pub mod string;

/// Generate a builder struct with `with_*` setters and a [`ConfigBuilder`]
/// implementation that reports missing required fields.
///
/// [`ConfigBuilder`]: crate::common::ConfigBuilder
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident {
        $($setter:ident => $field:ident: $ty:ty),* $(,)?
    }) => {
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl Default for $builder {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $builder {
            pub fn new() -> Self {
                Self {
                    $($field: None,)*
                }
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::LineageLensError> {
                Ok($config {
                    $($field: self.$field.ok_or_else(|| {
                        $crate::error::LineageLensError::ConfigurationError {
                            message: concat!(
                                "Missing required field: ",
                                stringify!($field)
                            )
                            .to_string(),
                        }
                    })?,)*
                })
            }
        }
    };
}
