//! Value Conversions
//!
//! Pure conversions between the GUI library's value representations and the
//! engine's: packed 32-bit colors, rectangles, 2D vectors, and texture
//! handles. All are bit-exact reinterpretations with no validation.

use crate::engine::{Color, Rect, TextureIndex, Vector2};
use crate::gui::{
    GuiTextureId, GuiVec2, GuiVec4, COL32_A_SHIFT, COL32_B_SHIFT, COL32_G_SHIFT, COL32_R_SHIFT,
};

/// Unpack a GUI packed color into engine channels.
///
/// Channel positions come from the shift constants, so differently
/// configured channel orders unpack correctly as long as pack and unpack
/// agree on the shifts.
pub fn unpack_color(color: u32) -> Color {
    Color {
        r: ((color >> COL32_R_SHIFT) & 0xFF) as u8,
        g: ((color >> COL32_G_SHIFT) & 0xFF) as u8,
        b: ((color >> COL32_B_SHIFT) & 0xFF) as u8,
        a: ((color >> COL32_A_SHIFT) & 0xFF) as u8,
    }
}

/// Pack engine channels into a GUI packed color.
pub fn pack_color(color: Color) -> u32 {
    ((color.r as u32) << COL32_R_SHIFT)
        | ((color.g as u32) << COL32_G_SHIFT)
        | ((color.b as u32) << COL32_B_SHIFT)
        | ((color.a as u32) << COL32_A_SHIFT)
}

/// Reinterpret a 4-component GUI vector as an engine rectangle.
pub fn to_rect(rect: GuiVec4) -> Rect {
    Rect {
        left: rect.x,
        top: rect.y,
        right: rect.z,
        bottom: rect.w,
    }
}

/// Reinterpret a 2-component GUI vector as an engine vector.
pub fn to_vector2(vector: GuiVec2) -> Vector2 {
    Vector2 {
        x: vector.x,
        y: vector.y,
    }
}

/// Recover the engine texture index from an opaque GUI texture id.
///
/// Exact inverse of [`to_gui_texture_id`]; the id is never dereferenced or
/// validated.
pub fn to_texture_index(id: GuiTextureId) -> TextureIndex {
    TextureIndex(id.0 as isize as i32)
}

/// Wrap an engine texture index as an opaque GUI texture id.
pub fn to_gui_texture_id(index: TextureIndex) -> GuiTextureId {
    GuiTextureId(index.0 as isize as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trip() {
        let color = Color {
            r: 0x12,
            g: 0x34,
            b: 0x56,
            a: 0x78,
        };
        assert_eq!(unpack_color(pack_color(color)), color);
    }

    #[test]
    fn color_channel_positions() {
        let packed = pack_color(Color {
            r: 0xFF,
            g: 0,
            b: 0,
            a: 0,
        });
        assert_eq!(packed, 0xFF << COL32_R_SHIFT);

        let packed = pack_color(Color {
            r: 0,
            g: 0,
            b: 0,
            a: 0xFF,
        });
        assert_eq!(packed, 0xFF << COL32_A_SHIFT);
    }

    #[test]
    fn color_extremes() {
        let white = Color {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
            a: 0xFF,
        };
        assert_eq!(pack_color(white), 0xFFFF_FFFF);
        assert_eq!(unpack_color(0xFFFF_FFFF), white);
        assert_eq!(
            unpack_color(0),
            Color {
                r: 0,
                g: 0,
                b: 0,
                a: 0
            }
        );
    }

    #[test]
    fn vec4_to_rect_field_mapping() {
        let rect = to_rect(GuiVec4 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            w: 4.0,
        });
        assert_eq!(rect.left, 1.0);
        assert_eq!(rect.top, 2.0);
        assert_eq!(rect.right, 3.0);
        assert_eq!(rect.bottom, 4.0);
    }

    #[test]
    fn vec2_to_vector2() {
        let v = to_vector2(GuiVec2 { x: 5.5, y: -2.5 });
        assert_eq!(v, Vector2::new(5.5, -2.5));
    }

    #[test]
    fn texture_id_round_trip() {
        for raw in [0, 1, 42, i32::MAX] {
            let index = TextureIndex(raw);
            assert_eq!(to_texture_index(to_gui_texture_id(index)), index);
        }
    }

    #[test]
    fn texture_id_negative_round_trip() {
        // Out-of-range indices are not validated; they still round-trip.
        let index = TextureIndex(-1);
        assert_eq!(to_texture_index(to_gui_texture_id(index)), index);
    }
}
