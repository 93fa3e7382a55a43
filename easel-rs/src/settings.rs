//! Per-call style settings.

/// Stroke settings. Absent fields leave the context value unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSettings<P> {
    pub thickness: Option<f32>,
    pub color: Option<P>,
}

impl<P> Default for StrokeSettings<P> {
    fn default() -> Self {
        Self {
            thickness: None,
            color: None,
        }
    }
}

impl<P> StrokeSettings<P> {
    pub fn new(thickness: f32, color: P) -> Self {
        Self {
            thickness: Some(thickness),
            color: Some(color),
        }
    }
}

/// Style applied for the duration of a single draw call.
///
/// Every field is optional; `None` keeps whatever the context currently has.
/// Fields are applied in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSettings<P> {
    pub fill: Option<P>,
    pub stroke: Option<StrokeSettings<P>>,
    pub alpha: Option<f32>,
    /// Composite operation alias or canonical name.
    pub composite: Option<String>,
}

impl<P> Default for StyleSettings<P> {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            alpha: None,
            composite: None,
        }
    }
}

impl<P> StyleSettings<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, paint: P) -> Self {
        self.fill = Some(paint);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeSettings<P>) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_composite(mut self, name: impl Into<String>) -> Self {
        self.composite = Some(name.into());
        self
    }

    /// Whether the settings imply a fill when painting shapes.
    pub(crate) fn implies_fill(&self) -> bool {
        self.fill.is_some()
    }

    /// Whether the settings imply a stroke when painting shapes.
    pub(crate) fn implies_stroke(&self) -> bool {
        self.stroke.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let settings: StyleSettings<String> = StyleSettings::default();
        assert!(settings.fill.is_none());
        assert!(!settings.implies_fill());
        assert!(!settings.implies_stroke());
    }

    #[test]
    fn test_builder_methods() {
        let settings = StyleSettings::new()
            .with_fill("red".to_string())
            .with_stroke(StrokeSettings::new(2.0, "blue".to_string()))
            .with_alpha(0.5)
            .with_composite("MASK");
        assert!(settings.implies_fill());
        assert!(settings.implies_stroke());
        assert_eq!(settings.alpha, Some(0.5));
        assert_eq!(settings.composite.as_deref(), Some("MASK"));
    }
}
