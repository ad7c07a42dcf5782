mod attempt_histogram;
mod efficiency;
mod layout;
mod sheet;

#[doc(inline)]
pub use attempt_histogram::AttemptHistogram;
#[doc(inline)]
pub use efficiency::diameter_histogram;
#[doc(inline)]
pub use efficiency::efficiency;
#[doc(inline)]
pub use layout::DiskLayout;
#[doc(inline)]
pub use sheet::Sheet;
