pub mod brand_image;

pub use brand_image::{BrandImage, BrandSlot, ResolvedImagePath};
