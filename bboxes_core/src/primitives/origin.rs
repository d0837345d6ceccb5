use std::fmt;

/// Location of the (0,0) point of a coordinate system.
///
/// Every variant is described by two polarity bits. `vertical_type` is `0` when
/// the origin row is the top edge and `1` when it is the bottom edge;
/// `horizontal_type` is `0` for the left edge and `1` for the right edge.
/// Conversions between origins only look at these bits, so each axis is
/// handled on its own.
///
/// | variant       | vertical | horizontal |
/// |---------------|----------|------------|
/// | `TopLeft`     | 0        | 0          |
/// | `TopRight`    | 0        | 1          |
/// | `BottomLeft`  | 1        | 0          |
/// | `BottomRight` | 1        | 1          |
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginType {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl OriginType {
    pub const ALL: [OriginType; 4] = [
        OriginType::TopLeft,
        OriginType::TopRight,
        OriginType::BottomLeft,
        OriginType::BottomRight,
    ];

    pub fn vertical_type(&self) -> u8 {
        match self {
            OriginType::TopLeft | OriginType::TopRight => 0,
            OriginType::BottomLeft | OriginType::BottomRight => 1,
        }
    }

    pub fn horizontal_type(&self) -> u8 {
        match self {
            OriginType::TopLeft | OriginType::BottomLeft => 0,
            OriginType::TopRight | OriginType::BottomRight => 1,
        }
    }

    /// Returns the origin with the given polarity bits, `None` if a bit is not 0 or 1.
    ///
    pub fn from_polarity(vertical_type: u8, horizontal_type: u8) -> Option<Self> {
        match (vertical_type, horizontal_type) {
            (0, 0) => Some(OriginType::TopLeft),
            (0, 1) => Some(OriginType::TopRight),
            (1, 0) => Some(OriginType::BottomLeft),
            (1, 1) => Some(OriginType::BottomRight),
            _ => None,
        }
    }
}

impl fmt::Display for OriginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OriginType::TopLeft => "top_left",
            OriginType::TopRight => "top_right",
            OriginType::BottomLeft => "bottom_left",
            OriginType::BottomRight => "bottom_right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::OriginType;

    #[test]
    fn test_polarity_table() {
        assert_eq!(
            (
                OriginType::TopLeft.vertical_type(),
                OriginType::TopLeft.horizontal_type()
            ),
            (0, 0)
        );
        assert_eq!(
            (
                OriginType::TopRight.vertical_type(),
                OriginType::TopRight.horizontal_type()
            ),
            (0, 1)
        );
        assert_eq!(
            (
                OriginType::BottomLeft.vertical_type(),
                OriginType::BottomLeft.horizontal_type()
            ),
            (1, 0)
        );
        assert_eq!(
            (
                OriginType::BottomRight.vertical_type(),
                OriginType::BottomRight.horizontal_type()
            ),
            (1, 1)
        );
    }

    #[test]
    fn test_from_polarity() {
        for origin in OriginType::ALL {
            assert_eq!(
                OriginType::from_polarity(origin.vertical_type(), origin.horizontal_type()),
                Some(origin)
            );
        }
        assert_eq!(OriginType::from_polarity(2, 0), None);
        assert_eq!(OriginType::from_polarity(0, 7), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(OriginType::TopLeft.to_string(), "top_left");
        assert_eq!(OriginType::TopRight.to_string(), "top_right");
        assert_eq!(OriginType::BottomLeft.to_string(), "bottom_left");
        assert_eq!(OriginType::BottomRight.to_string(), "bottom_right");
    }
}
