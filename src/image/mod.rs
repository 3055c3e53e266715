pub mod f32;
pub mod mask;
pub mod rgb;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::mask::Mask;
pub use self::rgb::{ChannelView, ImageRgb8};
pub use self::traits::ImageView;
