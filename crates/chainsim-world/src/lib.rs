//! The mock world backing the embedded VM host: accounts, storage, block
//! info, and the new-address hint registry the dispatcher populates before
//! a deploy. Also hosts the `VmHost` port and its in-process mock
//! implementation — a stand-in for the real WASM contract VM, which is an
//! external collaborator per spec and outside this crate's scope.

mod account;
mod block_info;
mod host;
mod mock_host;
mod step;
mod world;

pub use account::Account;
pub use block_info::BlockInfo;
pub use host::{HostError, VmHost, VmOutput};
pub use mock_host::MockVmHost;
pub use step::{EsdtTransfer, TxKind, TxStep};
pub use world::{NewAddressMock, World};
