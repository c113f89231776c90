//! Mutable 4x4 transform with chainable in-place setters.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::Vector4;

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// 4x4 transform stored column-major (element `(row, col)` at `col * 4 + row`).
///
/// Every `set_*` method overwrites the whole matrix and returns `&mut Self`
/// so calls can be chained. The type is `Copy`, which is what makes aliased
/// composition expressible: `m.set_multiply(m, b)` passes a snapshot of `m`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Matrix44 {
    m: [f32; 16],
}

impl Default for Matrix44 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix44 {
    pub const IDENTITY: Self = Self { m: IDENTITY };

    /// Build from 16 column-major floats.
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Column-major view, ready for a uniform upload.
    pub fn data(&self) -> &[f32; 16] {
        &self.m
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    pub fn set_identity(&mut self) -> &mut Self {
        self.m = IDENTITY;
        self
    }

    pub fn set_scale(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        self.m = IDENTITY;
        self.m[0] = sx;
        self.m[5] = sy;
        self.m[10] = sz;
        self
    }

    /// Translation lives in the last column (elements 12, 13, 14).
    pub fn set_translation(&mut self, tx: f32, ty: f32, tz: f32) -> &mut Self {
        self.m = IDENTITY;
        self.m[12] = tx;
        self.m[13] = ty;
        self.m[14] = tz;
        self
    }

    /// Right-handed rotation about +Y: a positive angle turns +Z towards +X.
    pub fn set_rotate_y(&mut self, theta: f32) -> &mut Self {
        let (s, c) = theta.sin_cos();
        self.m = [
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Right-handed perspective projection with depth mapped to [0, 1].
    ///
    /// View-space `z = -near` lands on depth 0 and `z = -far` on depth 1.
    /// `near == far` or `aspect == 0` give a degenerate, non-finite matrix.
    pub fn set_project(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) -> &mut Self {
        let f = 1.0 / (0.5 * fov_y).tan();
        let range_inv = 1.0 / (near - far);
        self.m = [
            f / aspect, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, far * range_inv, -1.0, //
            0.0, 0.0, near * far * range_inv, 0.0,
        ];
        self
    }

    /// `self = a * b` (apply `b` first, then `a`).
    ///
    /// The product is accumulated in a temporary, so `a` or `b` may be a copy
    /// of `self`.
    pub fn set_multiply(&mut self, a: Matrix44, b: Matrix44) -> &mut Self {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4)
                    .map(|k| a.m[k * 4 + row] * b.m[col * 4 + k])
                    .sum();
            }
        }
        self.m = out;
        self
    }

    /// `self = a * self`
    pub fn pre_multiply(&mut self, a: Matrix44) -> &mut Self {
        let current = *self;
        self.set_multiply(a, current)
    }

    /// `self = self * b`
    pub fn post_multiply(&mut self, b: Matrix44) -> &mut Self {
        let current = *self;
        self.set_multiply(current, b)
    }

    /// `M * v`
    pub fn transform(&self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Component-wise comparison within `tolerance`.
    pub fn abs_diff_eq(&self, other: &Matrix44, tolerance: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl From<Mat4> for Matrix44 {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix44> for Mat4 {
    fn from(m: Matrix44) -> Self {
        Mat4::from_cols_array(&m.m)
    }
}
