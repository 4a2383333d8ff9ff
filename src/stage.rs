use crate::grid::Size;

/// A built-in board layout under a display name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub size: Size,
}

/// Built-in stages, easiest first. Scramble strength follows the board area,
/// so the later entries mix considerably harder.
pub const STAGES: &[Stage] = &[
    Stage {
        name: "warmup",
        size: Size {
            width: 3,
            height: 1,
        },
    },
    Stage {
        name: "corner",
        size: Size {
            width: 2,
            height: 2,
        },
    },
    Stage {
        name: "classic",
        size: Size {
            width: 3,
            height: 3,
        },
    },
    Stage {
        name: "wide",
        size: Size {
            width: 5,
            height: 3,
        },
    },
    Stage {
        name: "expert",
        size: Size {
            width: 5,
            height: 5,
        },
    },
];

pub fn find(name: &str) -> Option<&'static Stage> {
    STAGES.iter().find(|stage| stage.name == name)
}
