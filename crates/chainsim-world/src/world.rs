//! The mock world: accounts keyed by raw address, current/previous block
//! info, and the new-address hint registry the dispatcher populates ahead
//! of a deploy.

use crate::Account;
use crate::BlockInfo;
use chainsim_types::Address;
use std::collections::HashMap;

/// A hint the dispatcher registers before invoking the host for a deploy,
/// so the (mock) VM knows what address to assign the new contract.
#[derive(Debug, Clone)]
pub struct NewAddressMock {
    pub creator_address: Address,
    pub creator_nonce: u64,
    pub new_address: Address,
}

/// The account map plus block info, shared mutably through the dispatcher's
/// single serialization point (spec.md §5).
#[derive(Debug, Clone, Default)]
pub struct World {
    accounts: HashMap<Address, Account>,
    pub current_block_info: BlockInfo,
    pub previous_block_info: BlockInfo,
    pub new_address_mocks: Vec<NewAddressMock>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch an account, auto-vivifying a zero-valued one on first
    /// reference (spec.md §9 open question, resolved per SPEC_FULL.md §1:
    /// an unseen address is a fresh account at nonce 0 / balance 0).
    pub fn get_account(&mut self, address: &[u8]) -> &Account {
        if !self.accounts.contains_key(address) {
            self.accounts
                .insert(address.to_vec(), Account::new(address.to_vec()));
        }
        self.accounts.get(address).expect("just inserted")
    }

    /// Same as `get_account` but returns a mutable reference, for the VM
    /// host to apply effects through.
    pub fn get_account_mut(&mut self, address: &[u8]) -> &mut Account {
        if !self.accounts.contains_key(address) {
            self.accounts
                .insert(address.to_vec(), Account::new(address.to_vec()));
        }
        self.accounts.get_mut(address).expect("just inserted")
    }

    /// Read-only peek, without auto-vivifying — used by admin/list views
    /// that should not conjure accounts just by iterating.
    pub fn peek_account(&self, address: &[u8]) -> Option<&Account> {
        self.accounts.get(address)
    }

    pub fn put_account(&mut self, account: Account) {
        self.accounts.insert(account.address.clone(), account);
    }

    pub fn all_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Snapshot the account map (query executor's read-only protocol).
    pub fn snapshot_accounts(&self) -> HashMap<Address, Account> {
        self.accounts.clone()
    }

    /// Restore a previously taken snapshot, unconditionally — the query
    /// executor calls this on every exit path.
    pub fn restore_accounts(&mut self, snapshot: HashMap<Address, Account>) {
        self.accounts = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_vivifies_unseen_account() {
        let mut world = World::new();
        let acct = world.get_account(&[9u8; 32]);
        assert_eq!(acct.nonce, 0);
    }

    #[test]
    fn snapshot_restore_is_isolated_from_later_mutation() {
        let mut world = World::new();
        world.get_account_mut(&[1u8; 32]).nonce = 5;
        let snap = world.snapshot_accounts();
        world.get_account_mut(&[1u8; 32]).nonce = 99;
        world.restore_accounts(snap);
        assert_eq!(world.get_account(&[1u8; 32]).nonce, 5);
    }

    #[test]
    fn peek_does_not_auto_vivify() {
        let world = World::new();
        assert!(world.peek_account(&[2u8; 32]).is_none());
    }
}
