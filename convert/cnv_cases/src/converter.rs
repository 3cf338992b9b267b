//! The converter seam.

/// Converts `In` to `Out`, or reports failure with `None`.
///
/// Any `Fn(In) -> Option<Out>` is a converter, so closures and plain
/// functions can be handed to the checks directly:
///
/// ```
/// use cnv_cases::{int_to_str, Converter};
///
/// let cnv = |v: i32| Some(v.to_string());
/// assert_eq!(cnv.convert(7), Some("7".to_owned()));
/// assert!(int_to_str(&cnv).is_ok());
/// ```
pub trait Converter<In, Out> {
    fn convert(&self, input: In) -> Option<Out>;
}

impl<F, In, Out> Converter<In, Out> for F
where
    F: Fn(In) -> Option<Out>,
{
    #[inline]
    fn convert(&self, input: In) -> Option<Out> {
        self(input)
    }
}
