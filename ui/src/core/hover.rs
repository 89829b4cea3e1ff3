//! Hover tracking for the nav list and the highlight's enter/exit timing.

/// At most one nav entry is hovered at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Over(usize),
}

impl HoverState {
    pub fn enter(&mut self, index: usize) {
        *self = HoverState::Over(index);
    }

    /// Leaving any entry clears the hover, whichever entry was active.
    pub fn leave(&mut self) {
        *self = HoverState::Idle;
    }

    pub fn highlighted(self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Over(index) => Some(index),
        }
    }

    pub fn is_highlighted(self, index: usize) -> bool {
        self.highlighted() == Some(index)
    }
}

/// Horizontal extent of a nav entry, measured from the left edge of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinkSlot {
    pub left: f64,
    pub width: f64,
}

/// Hover plus the entry the highlight last sat on.
///
/// The highlight keeps its position after the pointer leaves so it fades out
/// in place, and it only slides when the pointer moves straight from one
/// entry to another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightTrack {
    hover: HoverState,
    anchor: Option<usize>,
    sliding: bool,
}

impl HighlightTrack {
    pub fn enter(&mut self, index: usize) {
        self.sliding = self.hover.highlighted().is_some();
        self.hover.enter(index);
        self.anchor = Some(index);
    }

    pub fn leave(&mut self) {
        self.hover.leave();
        self.sliding = false;
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Placement of the one highlight given the measured entries.
    pub fn frame(&self, slots: &[Option<LinkSlot>]) -> HighlightFrame {
        let slot = self
            .anchor
            .and_then(|index| slots.get(index).copied().flatten());
        HighlightFrame {
            visible: self.hover.highlighted().is_some() && slot.is_some(),
            sliding: self.sliding,
            slot,
        }
    }
}

/// Where the highlight is drawn and whether it is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HighlightFrame {
    pub visible: bool,
    pub sliding: bool,
    pub slot: Option<LinkSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Transition {
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }

    fn css(self, property: &str) -> String {
        format!(
            "{property} {}ms ease {}ms",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Timing for the hover highlight. `layout_id` names the single highlight
/// element that moves between links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightMotion {
    pub layout_id: &'static str,
    pub enter: Transition,
    pub exit: Transition,
}

impl Default for HighlightMotion {
    fn default() -> Self {
        Self::standard()
    }
}

impl HighlightMotion {
    pub const fn standard() -> Self {
        Self {
            layout_id: "hover-background",
            enter: Transition::new(150, 0),
            exit: Transition::new(150, 200),
        }
    }

    /// Inline style placing and fading the highlight.
    pub fn style(&self, frame: &HighlightFrame) -> String {
        let geometry = match frame.slot {
            Some(LinkSlot { left, width }) => {
                format!("width: {width}px; transform: translateX({left}px);")
            }
            None => "width: 0px;".to_string(),
        };

        if !frame.visible {
            return format!(
                "opacity: 0; {geometry} transition: {};",
                self.exit.css("opacity")
            );
        }

        let mut transition = self.enter.css("opacity");
        if frame.sliding {
            transition.push_str(&format!(
                ", {}, {}",
                self.enter.css("transform"),
                self.enter.css("width")
            ));
        }
        format!("opacity: 1; {geometry} transition: {transition};")
    }
}
