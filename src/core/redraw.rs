//! Redraw requests and key-handling outcomes shared by both widgets.

/// Which part of a widget's region needs repainting.
///
/// Variants are ordered by extent so that merging two requests keeps the
/// larger one (`Full` swallows `Output`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Redraw {
    #[default]
    None,
    /// Only the scrolling output log changed.
    Output,
    /// Only border / colours changed (theme switch on the console).
    Chrome,
    /// Everything.
    Full,
}

impl Redraw {
    pub fn merge(self, other: Redraw) -> Redraw {
        self.max(other)
    }

    pub fn is_pending(self) -> bool {
        self != Redraw::None
    }
}

/// Whether a widget consumed an input event.  `Consumed` is the terminal
/// analogue of preventing the default action: the host must not act on the
/// key again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        self == KeyOutcome::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_the_larger_region() {
        assert_eq!(Redraw::None.merge(Redraw::Output), Redraw::Output);
        assert_eq!(Redraw::Full.merge(Redraw::Output), Redraw::Full);
        assert_eq!(Redraw::Output.merge(Redraw::Chrome), Redraw::Chrome);
        assert!(!Redraw::default().is_pending());
    }
}
