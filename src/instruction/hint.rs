use std::fmt;

/// Cache prefetch hints accepted by `pref`, carried in the RT field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hint {
    Load = 0,
    Store = 1,
    LoadStreamed = 3,
    StoreStreamed = 5,
    LoadRetained = 6,
    StoreRetained = 7,
}

impl Hint {
    pub const ALL: [Hint; 6] = [
        Hint::Load,
        Hint::Store,
        Hint::LoadStreamed,
        Hint::StoreStreamed,
        Hint::LoadRetained,
        Hint::StoreRetained,
    ];

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|hint| hint.value() == value)
    }

    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn description(self) -> &'static str {
        match self {
            Hint::Load => "Data is expected to be loaded, not modified",
            Hint::Store => "Data is expected to be stored or modified",
            Hint::LoadStreamed => {
                "Data is expected to be loaded but not reused extensively"
            }
            Hint::StoreStreamed => {
                "Data is expected to be stored but not reused extensively"
            }
            Hint::LoadRetained => {
                "Data is expected to be loaded and reused extensively"
            }
            Hint::StoreRetained => {
                "Data is expected to be stored and reused extensively"
            }
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Hint::Load => "load",
            Hint::Store => "store",
            Hint::LoadStreamed => "load_streamed",
            Hint::StoreStreamed => "store_streamed",
            Hint::LoadRetained => "load_retained",
            Hint::StoreRetained => "store_retained",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Hint::from_value(0), Some(Hint::Load));
        assert_eq!(Hint::from_value(1), Some(Hint::Store));
        assert_eq!(Hint::from_value(7), Some(Hint::StoreRetained));

        for reserved in [2, 4, 8, 31] {
            assert_eq!(Hint::from_value(reserved), None);
        }
    }

    #[test]
    fn test_round_trip() {
        for hint in Hint::ALL {
            assert_eq!(Hint::from_value(hint.value()), Some(hint));
        }
    }
}
