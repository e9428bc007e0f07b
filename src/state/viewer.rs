use std::rc::Rc;
use yew::Reducible;

/// Flipbook position plus the two overlay toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub current: usize,
    pub scene_count: usize,
    pub show_info: bool,
    pub lightbox_open: bool,
}

impl ViewerState {
    pub fn new(scene_count: usize) -> Self {
        Self {
            scene_count,
            ..Default::default()
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.scene_count
    }

    /// Whether `action` would change this state; keys that don't are left
    /// to the browser.
    pub fn changes_on(&self, action: &ViewerAction) -> bool {
        match action {
            ViewerAction::Next => !self.is_last(),
            ViewerAction::Previous => !self.is_first(),
            ViewerAction::JumpTo(i) => self.clamp(*i) != self.current,
            ViewerAction::ToggleInfo => true,
            ViewerAction::OpenLightbox => !self.lightbox_open && self.scene_count > 0,
            ViewerAction::CloseLightbox => self.lightbox_open,
            ViewerAction::Reset { scene_count } => *self != ViewerState::new(*scene_count),
        }
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.scene_count.saturating_sub(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Previous,
    JumpTo(usize),
    ToggleInfo,
    OpenLightbox,
    CloseLightbox,
    /// A different comic was loaded.
    Reset { scene_count: usize },
}

impl ViewerAction {
    /// Keyboard bindings for the flipbook.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(ViewerAction::Next),
            "ArrowLeft" => Some(ViewerAction::Previous),
            "i" | "I" => Some(ViewerAction::ToggleInfo),
            "Escape" => Some(ViewerAction::CloseLightbox),
            _ => None,
        }
    }
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ViewerAction::*;
        let mut new = (*self).clone();
        match action {
            Next => {
                if new.is_last() {
                    return self;
                }
                new.current += 1;
            }
            Previous => {
                if new.is_first() {
                    return self;
                }
                new.current -= 1;
            }
            JumpTo(i) => new.current = new.clamp(i),
            ToggleInfo => new.show_info = !new.show_info,
            OpenLightbox => new.lightbox_open = new.scene_count > 0,
            CloseLightbox => {
                if !new.lightbox_open {
                    return self;
                }
                new.lightbox_open = false;
            }
            Reset { scene_count } => new = ViewerState::new(scene_count),
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(current: usize, count: usize) -> Rc<ViewerState> {
        Rc::new(ViewerState {
            current,
            ..ViewerState::new(count)
        })
    }

    #[test]
    fn previous_at_start_is_noop() {
        let s = at(0, 3);
        let after = s.clone().reduce(ViewerAction::Previous);
        assert!(Rc::ptr_eq(&s, &after));
        assert_eq!(after.current, 0);
    }

    #[test]
    fn next_at_end_is_noop() {
        let s = at(2, 3);
        let after = s.clone().reduce(ViewerAction::Next);
        assert_eq!(after.current, 2);
        assert!(Rc::ptr_eq(&s, &after));
        assert_eq!(at(0, 3).reduce(ViewerAction::Next).current, 1);
    }

    #[test]
    fn jump_to_clamps() {
        assert_eq!(at(0, 4).reduce(ViewerAction::JumpTo(99)).current, 3);
        assert_eq!(at(3, 4).reduce(ViewerAction::JumpTo(1)).current, 1);
        assert_eq!(at(0, 0).reduce(ViewerAction::JumpTo(5)).current, 0);
    }

    #[test]
    fn empty_comic_never_moves() {
        let s = at(0, 0);
        assert_eq!(s.clone().reduce(ViewerAction::Next).current, 0);
        assert!(!s.reduce(ViewerAction::OpenLightbox).lightbox_open);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(ViewerAction::from_key("ArrowRight"), Some(ViewerAction::Next));
        assert_eq!(ViewerAction::from_key("ArrowLeft"), Some(ViewerAction::Previous));
        assert_eq!(ViewerAction::from_key("I"), Some(ViewerAction::ToggleInfo));
        assert_eq!(ViewerAction::from_key("Escape"), Some(ViewerAction::CloseLightbox));
        assert_eq!(ViewerAction::from_key("x"), None);
    }

    #[test]
    fn toggles_and_reset() {
        let s = at(1, 3)
            .reduce(ViewerAction::ToggleInfo)
            .reduce(ViewerAction::OpenLightbox);
        assert!(s.show_info && s.lightbox_open);
        let s = s.reduce(ViewerAction::CloseLightbox);
        assert!(!s.lightbox_open);
        let s = s.reduce(ViewerAction::Reset { scene_count: 7 });
        assert_eq!(*s, ViewerState::new(7));
    }

    #[test]
    fn keys_only_claimed_when_they_change_something() {
        let s = at(0, 3);
        assert!(s.changes_on(&ViewerAction::Next));
        assert!(!s.changes_on(&ViewerAction::Previous));
        assert!(!s.changes_on(&ViewerAction::CloseLightbox));
        assert!(s.changes_on(&ViewerAction::ToggleInfo));
        assert!(!at(2, 3).changes_on(&ViewerAction::Next));

        let open = s.reduce(ViewerAction::OpenLightbox);
        assert!(open.changes_on(&ViewerAction::CloseLightbox));
        assert!(!open.changes_on(&ViewerAction::OpenLightbox));
        assert!(!ViewerState::new(0).changes_on(&ViewerAction::OpenLightbox));
    }

    #[test]
    fn change_prediction_matches_reducer() {
        let actions = [
            ViewerAction::Next,
            ViewerAction::Previous,
            ViewerAction::JumpTo(1),
            ViewerAction::JumpTo(9),
            ViewerAction::CloseLightbox,
            ViewerAction::OpenLightbox,
        ];
        for current in 0..3 {
            for action in actions.iter().cloned() {
                let s = at(current, 3);
                let predicted = s.changes_on(&action);
                let after = s.clone().reduce(action.clone());
                assert_eq!(predicted, *after != *s, "{action:?} at {current}");
            }
        }
    }
}
