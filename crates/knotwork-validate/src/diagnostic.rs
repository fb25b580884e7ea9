//! Diagnostics and the validation verdict.

use std::fmt;

/// A spatial axis of the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// All three axes, in diagnostic order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The upper-case label used in diagnostic messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What class of problem a diagnostic reports.
///
/// The distinction matters for callers that want non-strict behavior:
/// [`DiagnosticKind::Geometry`] diagnostics flag geometric unsuitability
/// (an open or degenerate or oversized curve) rather than unsafe or
/// unparseable input, and a caller may choose to treat them as warnings.
/// Rejecting `Syntax` and `Evaluation` diagnostics is never optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Empty input, unbalanced parentheses, or a parse failure.
    Syntax,
    /// The equation parsed but produced non-finite sample values.
    Evaluation,
    /// The curve is well-defined but geometrically unsuitable: not
    /// periodic, degenerate, or too large for the renderer.
    Geometry,
}

/// One problem found during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The offending axis, if the problem is axis-specific.
    pub axis: Option<Axis>,
    /// The class of the problem.
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn syntax(axis: Axis, message: String) -> Self {
        Self {
            axis: Some(axis),
            kind: DiagnosticKind::Syntax,
            message,
        }
    }

    pub(crate) fn evaluation(axis: Axis, message: String) -> Self {
        Self {
            axis: Some(axis),
            kind: DiagnosticKind::Evaluation,
            message,
        }
    }

    pub(crate) fn geometry(axis: Option<Axis>, message: String) -> Self {
        Self {
            axis,
            kind: DiagnosticKind::Geometry,
            message,
        }
    }

    /// True for warning-class (geometry) diagnostics.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.kind == DiagnosticKind::Geometry
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The outcome of validating an equation triple.
///
/// Produced fresh on every validation call and never mutated. Validity is
/// defined as the absence of diagnostics; the diagnostics are ordered by
/// pipeline stage, and by axis (x, y, z) within a stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationVerdict {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationVerdict {
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// True if and only if no diagnostics were produced.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All diagnostics, in stage order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The non-warning diagnostics: syntax and evaluation failures.
    ///
    /// A caller that treats geometry findings as soft warnings can use this
    /// to decide rejection while still surfacing the warnings.
    pub fn hard_errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_warning())
    }

    /// The warning-class (geometry) diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// Consumes the verdict, returning the diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
