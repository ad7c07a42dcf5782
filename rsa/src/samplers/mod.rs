pub mod diameter_sampler;
pub mod uniform_rect_sampler;
