//! Declarative style descriptors consumed by the document model.
//!
//! Composers describe *what* a node should look like (an edge with a single
//! rule of weight 6, 18pt before, 0.25in indent) and the serializer owns the
//! translation into `docx-rs` elements. Nothing in here knows about the
//! package format.

use serde::{Deserialize, Serialize};

/// Twentieths of a point per point.
const TWIPS_PER_POINT: f32 = 20.0;
/// Twentieths of a point per inch.
const TWIPS_PER_INCH: f32 = 1440.0;

// ────────────────────────────────────────────────────────────────────────────
// Lengths
// ────────────────────────────────────────────────────────────────────────────

/// A non-negative length stored in twips (1/20 pt, 1/1440 in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Length(u32);

impl Length {
    pub const ZERO: Length = Length(0);

    /// A length in points. Negative input is a programmer error.
    pub fn pt(points: f32) -> Self {
        debug_assert!(points >= 0.0, "negative length: {points}pt");
        Length((points.max(0.0) * TWIPS_PER_POINT).round() as u32)
    }

    /// A length in inches. Negative input is a programmer error.
    pub fn inches(inches: f32) -> Self {
        debug_assert!(inches >= 0.0, "negative length: {inches}in");
        Length((inches.max(0.0) * TWIPS_PER_INCH).round() as u32)
    }

    pub fn from_twips(twips: u32) -> Self {
        Length(twips)
    }

    pub fn twips(self) -> u32 {
        self.0
    }

    /// Font sizes are expressed in half-points by the package format.
    pub fn half_points(self) -> u32 {
        (self.0 + 5) / 10
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraph-level descriptors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

// ────────────────────────────────────────────────────────────────────────────
// Borders
// ────────────────────────────────────────────────────────────────────────────

/// Edges a border can be attached to.
///
/// Paragraphs accept the four outer edges. Tables additionally accept the two
/// inside edges (between rows, between columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderEdge {
    Top,
    Left,
    Bottom,
    Right,
    InsideHorizontal,
    InsideVertical,
}

impl BorderEdge {
    /// Every edge a table border set may carry, in schema order.
    pub const TABLE_EDGES: [BorderEdge; 6] = [
        BorderEdge::Top,
        BorderEdge::Left,
        BorderEdge::Bottom,
        BorderEdge::Right,
        BorderEdge::InsideHorizontal,
        BorderEdge::InsideVertical,
    ];

    pub fn is_inside(self) -> bool {
        matches!(self, BorderEdge::InsideHorizontal | BorderEdge::InsideVertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Single,
    /// Explicitly suppresses a border the defaults would otherwise draw.
    Nil,
}

/// A single border rule. Rules are always drawn in the automatic color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub style: BorderStyle,
    /// Line weight in eighths of a point.
    pub weight: u8,
    /// Gap between the rule and the text, in points.
    pub space: u8,
}

impl Border {
    /// A single-line rule of the given weight (eighths of a point).
    pub fn single(weight: u8) -> Self {
        Self {
            style: BorderStyle::Single,
            weight,
            space: 0,
        }
    }

    /// A suppressed edge.
    pub fn none() -> Self {
        Self {
            style: BorderStyle::Nil,
            weight: 0,
            space: 0,
        }
    }

    pub fn with_space(mut self, space: u8) -> Self {
        self.space = space;
        self
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::Nil
    }
}

/// The set of borders attached to one paragraph or one table.
///
/// Each edge appears at most once; setting an edge again replaces it.
/// Iteration is always in schema order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSet {
    edges: Vec<(BorderEdge, Border)>,
}

impl BorderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, edge: BorderEdge, border: Border) -> Self {
        self.set(edge, border);
        self
    }

    pub fn set(&mut self, edge: BorderEdge, border: Border) {
        match self.edges.iter_mut().find(|(e, _)| *e == edge) {
            Some(slot) => slot.1 = border,
            None => {
                self.edges.push((edge, border));
                self.edges.sort_by_key(|(e, _)| *e);
            }
        }
    }

    pub fn get(&self, edge: BorderEdge) -> Option<&Border> {
        self.edges.iter().find(|(e, _)| *e == edge).map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BorderEdge, &Border)> {
        self.edges.iter().map(|(e, b)| (*e, b))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges that actually draw a line.
    #[cfg(test)]
    pub fn visible_edges(&self) -> Vec<BorderEdge> {
        self.iter()
            .filter(|(_, b)| b.is_visible())
            .map(|(e, _)| e)
            .collect()
    }

    /// Suppresses every table edge except `keep`, which gets `border`.
    pub fn only(keep: BorderEdge, border: Border) -> Self {
        BorderEdge::TABLE_EDGES
            .iter()
            .fold(BorderSet::new(), |set, &edge| {
                if edge == keep {
                    set.with(edge, border.clone())
                } else {
                    set.with(edge, Border::none())
                }
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page and document defaults
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    /// Top/bottom share one value, left/right the other.
    pub fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: Length,
    pub height: Length,
    pub margins: Margins,
}

impl PageSetup {
    /// Width available to body text between the left and right margins.
    pub fn text_width(&self) -> Length {
        Length::from_twips(
            self.width
                .twips()
                .saturating_sub(self.margins.left.twips() + self.margins.right.twips()),
        )
    }
}

impl Default for PageSetup {
    /// US letter with one-inch margins.
    fn default() -> Self {
        Self {
            width: Length::inches(8.5),
            height: Length::inches(11.0),
            margins: Margins::symmetric(Length::inches(1.0), Length::inches(1.0)),
        }
    }
}

/// Formatting applied document-wide through the default paragraph style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    pub font_family: String,
    pub font_size: Length,
    pub space_after: Option<Length>,
    /// Multiple of single line spacing, e.g. 1.15.
    pub line_spacing: Option<f32>,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size: Length::pt(11.0),
            space_after: None,
            line_spacing: None,
        }
    }
}
