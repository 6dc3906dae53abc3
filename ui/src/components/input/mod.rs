pub mod date_picker;
pub mod validated_input;
pub mod validation_feedback;

pub use date_picker::*;
pub use validated_input::*;
pub use validation_feedback::*;
