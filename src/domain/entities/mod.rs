//! Domain entity definitions.

mod book;
mod category;
mod device_details;
mod lecture;
mod publication;

pub use book::{Book, BookDetails};
pub use category::{Device, DeviceCategory, DeviceFromApi, flatten_devices};
pub use device_details::{DeviceDetails, Malfunction};
pub use lecture::{LECTURES, Lecture, LectureId, Stage, lectures_for_stage};
pub use publication::{Article, Conference};
