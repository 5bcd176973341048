//! Composed `transform` attribute values

use crate::document::number::join_numbers;
use std::fmt;

/// One transform function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    /// `translate(x,y)`
    Translate,
    /// `rotate(angle,cx,cy)`
    Rotate,
    /// `scale(x,y)`
    Scale,
}

impl TransformKind {
    /// Function name as written in markup
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
        }
    }
}

/// Ordered list of transform functions
///
/// Functions render in the order they were first added; adding a kind twice
/// replaces its arguments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    operations: Vec<(TransformKind, Vec<f64>)>,
}

impl Transform {
    /// Create an empty transform
    pub const fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Shift by `(x, y)`
    #[must_use]
    pub fn translate(self, x: f64, y: f64) -> Self {
        self.with(TransformKind::Translate, vec![x, y])
    }

    /// Rotate by `angle` degrees around `(cx, cy)`
    #[must_use]
    pub fn rotate(self, angle: f64, cx: f64, cy: f64) -> Self {
        self.with(TransformKind::Rotate, vec![angle, cx, cy])
    }

    /// Scale by `(x, y)`; negative factors reflect
    #[must_use]
    pub fn scale(self, x: f64, y: f64) -> Self {
        self.with(TransformKind::Scale, vec![x, y])
    }

    /// Add a function with arbitrary arguments
    #[must_use]
    pub fn with(mut self, kind: TransformKind, arguments: Vec<f64>) -> Self {
        if let Some(entry) = self.operations.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = arguments;
        } else {
            self.operations.push((kind, arguments));
        }
        self
    }

    /// Functions in render order
    pub fn operations(&self) -> &[(TransformKind, Vec<f64>)] {
        &self.operations
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .operations
            .iter()
            .map(|(kind, arguments)| format!("{}({})", kind.name(), join_numbers(arguments)))
            .collect();
        f.write_str(&rendered.join(" "))
    }
}
