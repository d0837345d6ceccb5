use crate::consts::EPS;
use crate::primitives::OriginType;
use log::{debug, trace, warn};
use std::fmt;
use thiserror::Error;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BBoxField {
    Xmin,
    Ymin,
    Xmax,
    Ymax,
}

impl fmt::Display for BBoxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BBoxField::Xmin => "xmin",
            BBoxField::Ymin => "ymin",
            BBoxField::Xmax => "xmax",
            BBoxField::Ymax => "ymax",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BBoxError {
    #[error("{field} ({value}) must be a finite non-negative number")]
    RangeViolation { field: BBoxField, value: f64 },
    #[error("{min_field} ({min}) must be smaller than {max_field} ({max})")]
    OrderViolation {
        min_field: BBoxField,
        min: f64,
        max_field: BBoxField,
        max: f64,
    },
}

/// Axis-aligned bounding box anchored to a coordinate origin.
///
/// The box can only be obtained through a validating constructor, so every
/// instance satisfies `0 <= xmin < xmax` and `0 <= ymin < ymax` with finite
/// coordinates. The value is never modified in place; operations return a new box.
///
/// Equality requires the same origin and coordinates that match within the
/// relative tolerance [`EPS`], so noise left by float arithmetic (`10` vs
/// `10 + 1e-10`) does not make boxes differ. The relation is not transitive
/// across long chains of near-equal values. Boxes describing the same region
/// under different origins are never equal. Use [`BBox::almost_eq`] for an
/// absolute tolerance of your choice.
///
#[derive(Debug, Clone, Copy)]
pub struct BBox {
    origin_type: OriginType,
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl PartialEq for BBox {
    fn eq(&self, other: &Self) -> bool {
        self.origin_type == other.origin_type
            && coord_eq(self.xmin, other.xmin)
            && coord_eq(self.ymin, other.ymin)
            && coord_eq(self.xmax, other.xmax)
            && coord_eq(self.ymax, other.ymax)
    }
}

fn coord_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

fn check_range(field: BBoxField, value: f64) -> Result<(), BBoxError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BBoxError::RangeViolation { field, value })
    }
}

fn check_order(
    min_field: BBoxField,
    min: f64,
    max_field: BBoxField,
    max: f64,
) -> Result<(), BBoxError> {
    if min < max {
        Ok(())
    } else {
        Err(BBoxError::OrderViolation {
            min_field,
            min,
            max_field,
            max,
        })
    }
}

/// Mirrors the `[min, max]` span inside `[0, extent]`. Min and max swap roles.
fn flip_span(min: f64, max: f64, extent: f64) -> (f64, f64) {
    (extent - max, extent - min)
}

impl BBox {
    pub fn new(
        origin_type: OriginType,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    ) -> Result<Self, BBoxError> {
        Self::validate(xmin, ymin, xmax, ymax).inspect_err(|e| {
            debug!("Rejected {} bounding box: {}", origin_type, e);
        })?;
        Ok(Self {
            origin_type,
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Builds a box from its min corner and its extents.
    ///
    pub fn ltwh(
        origin_type: OriginType,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, BBoxError> {
        Self::new(origin_type, left, top, left + width, top + height)
    }

    // first violation wins: ranges in field order, then x order, then y order
    fn validate(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<(), BBoxError> {
        check_range(BBoxField::Xmin, xmin)?;
        check_range(BBoxField::Ymin, ymin)?;
        check_range(BBoxField::Xmax, xmax)?;
        check_range(BBoxField::Ymax, ymax)?;
        check_order(BBoxField::Xmin, xmin, BBoxField::Xmax, xmax)?;
        check_order(BBoxField::Ymin, ymin, BBoxField::Ymax, ymax)
    }

    pub fn get_origin_type(&self) -> OriginType {
        self.origin_type
    }

    pub fn get_xmin(&self) -> f64 {
        self.xmin
    }

    pub fn get_ymin(&self) -> f64 {
        self.ymin
    }

    pub fn get_xmax(&self) -> f64 {
        self.xmax
    }

    pub fn get_ymax(&self) -> f64 {
        self.ymax
    }

    pub fn get_width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn get_height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn get_area(&self) -> f64 {
        self.get_width() * self.get_height()
    }

    /// Returns (xmin, ymin, xmax, ymax) coordinates.
    ///
    pub fn as_ltrb(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.ymin, self.xmax, self.ymax)
    }

    /// Returns (xmin, ymin, width, height) coordinates.
    ///
    pub fn as_ltwh(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.ymin, self.get_width(), self.get_height())
    }

    pub fn almost_eq(&self, other: &Self, eps: f64) -> bool {
        self.origin_type == other.origin_type
            && (self.xmin - other.xmin).abs() < eps
            && (self.ymin - other.ymin).abs() < eps
            && (self.xmax - other.xmax).abs() < eps
            && (self.ymax - other.ymax).abs() < eps
    }

    /// Expresses the box in the coordinate system with origin `to`.
    ///
    /// An axis is mirrored inside the canvas only when the polarity bit of that
    /// axis differs between the current origin and `to`. The result goes
    /// through the regular validation, so a canvas smaller than the box yields
    /// a [`BBoxError`] instead of a corrupt box.
    ///
    /// Coordinates are `f64`, so canvases of millions of units still keep
    /// sub-millimetre spans such as `10.0..10.01` apart after mirroring.
    ///
    /// Canvas extents must be positive. They are not checked separately: an
    /// extent is only used when its axis is mirrored, and a bad one then shows
    /// up as a range violation.
    ///
    pub fn convert_origin_type(
        &self,
        to: OriginType,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<BBox, BBoxError> {
        if !(canvas_width > 0.0 && canvas_width.is_finite())
            || !(canvas_height > 0.0 && canvas_height.is_finite())
        {
            warn!(
                "Converting bounding box with invalid canvas {}x{}",
                canvas_width, canvas_height
            );
        }

        let x_flip = self.origin_type.horizontal_type() != to.horizontal_type();
        let y_flip = self.origin_type.vertical_type() != to.vertical_type();
        trace!(
            "Converting bounding box from {} to {} (x_flip={}, y_flip={})",
            self.origin_type,
            to,
            x_flip,
            y_flip
        );

        let (xmin, xmax) = if x_flip {
            flip_span(self.xmin, self.xmax, canvas_width)
        } else {
            (self.xmin, self.xmax)
        };

        let (ymin, ymax) = if y_flip {
            flip_span(self.ymin, self.ymax, canvas_height)
        } else {
            (self.ymin, self.ymax)
        };

        BBox::new(to, xmin, ymin, xmax, ymax)
    }
}
