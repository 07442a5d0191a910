use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Today,
    Cafe,
    Moon,
    Urhu,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [Self::Today, Self::Cafe, Self::Moon, Self::Urhu];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Cafe => "cafe",
            Self::Moon => "moon",
            Self::Urhu => "urhu",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(key.trim()))
    }

    /// Text shown on the folder tab.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Cafe => "café",
            Self::Moon => "moon",
            Self::Urhu => "urhu",
        }
    }

    /// Vertical placement of the folder tab along the card edge.
    pub fn tab_offset(self) -> &'static str {
        match self {
            Self::Today => "44%",
            Self::Cafe => "59%",
            Self::Moon => "74%",
            Self::Urhu => "89%",
        }
    }

    pub fn card(self) -> Card {
        Card {
            key: self,
            label: self.label(),
            tab_offset: self.tab_offset(),
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigable page in the stack. The page body is rendered by dispatching on `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub key: PageKey,
    pub label: &'static str,
    pub tab_offset: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn translate_style(self) -> String {
        format!("transform: translate({}px, {}px);", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pointer and widget positions captured at grab time.
///
/// Move handlers read the origin from the session instead of from captured closure state, so a
/// move always translates relative to where the grab started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_pointer: PointerPosition,
    pub origin_position: Position,
}

impl DragSession {
    pub fn begin(pointer: PointerPosition, position: Position) -> Self {
        Self {
            origin_pointer: pointer,
            origin_position: position,
        }
    }

    /// Widget position for `pointer`: pure translation, no scaling or clamping.
    pub fn position_at(&self, pointer: PointerPosition) -> Position {
        self.origin_position.offset(
            f64::from(pointer.x - self.origin_pointer.x),
            f64::from(pointer.y - self.origin_pointer.y),
        )
    }
}
