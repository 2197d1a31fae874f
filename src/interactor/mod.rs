pub mod payment_interactor;

pub use payment_interactor::{PaymentInteractor, SnapshotPaymentInteractor};
