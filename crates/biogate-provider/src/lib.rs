pub mod error;
pub mod simulated;
pub mod traits;
pub mod types;

pub use error::{ProviderError, ProviderResult};
pub use simulated::SimulatedProvider;
pub use traits::BiometricProvider;
pub use types::{AuthenticateOptions, BiometryAvailability, BiometryErrorCode, BiometryType};
