//! End-to-end command runs through the JSON storage.

use loyaltylift_domain::traits::AddressBookStorage;
use loyaltylift_domain::{Index, Model, Points, Tier, TierTable};
use loyaltylift_logic::commands::{
    AddPointsCommand, MarkCustomerCommand, SetPointsCommand, SetTierCommand,
};
use loyaltylift_logic::{CommandError, LogicError, LogicManager};
use loyaltylift_store::sample::sample_address_book;
use loyaltylift_store::JsonAddressBookStorage;
use tempfile::TempDir;

fn manager(dir: &TempDir) -> LogicManager<JsonAddressBookStorage> {
    let storage = JsonAddressBookStorage::new(dir.path().join("addressbook.json"));
    let model = Model::new(sample_address_book().unwrap(), TierTable::default()).unwrap();
    LogicManager::new(model, storage)
}

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

#[test]
fn test_commands_are_persisted() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager(&dir);

    manager.execute(&MarkCustomerCommand::new(index(2))).unwrap();
    manager
        .execute(&SetPointsCommand::new(index(1), Points::new(300, 5300).unwrap()))
        .unwrap();

    let reloaded = manager.storage().read_address_book().unwrap().unwrap();
    assert_eq!(&reloaded, manager.model().address_book());

    let alex = &reloaded.customers()[0];
    assert_eq!(alex.points(), Points::new(300, 5300).unwrap());
    assert_eq!(alex.tier(), Tier::Silver);
    assert!(reloaded.customers()[1].is_marked());
}

#[test]
fn test_set_tier_reclassifies_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager(&dir);

    manager
        .execute(&SetTierCommand::new(Tier::Gold, Points::uniform(7000).unwrap()))
        .unwrap();

    let reloaded = manager.storage().read_address_book().unwrap().unwrap();
    let tiers = manager.model().tiers();
    for customer in reloaded.customers() {
        assert_eq!(customer.tier(), tiers.tier_for(&customer.points()));
    }
    // Charlotte holds 7200 cumulative
    assert_eq!(reloaded.customers()[2].tier(), Tier::Gold);
}

#[test]
fn test_rejected_threshold_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager(&dir);

    let err = manager
        .execute(&SetTierCommand::new(Tier::Gold, Points::uniform(4000).unwrap()))
        .unwrap_err();

    assert!(matches!(
        err,
        LogicError::Command(CommandError::InvalidTierThreshold)
    ));
    assert!(manager.storage().read_address_book().unwrap().is_none());
    assert_eq!(manager.model().tiers(), &TierTable::default());
}

#[test]
fn test_redeem_then_reload() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager(&dir);

    manager.execute(&AddPointsCommand::new(index(3), -500)).unwrap();

    let reloaded = manager.storage().read_address_book().unwrap().unwrap();
    let charlotte = &reloaded.customers()[2];
    assert_eq!(charlotte.points(), Points::new(2000, 7200).unwrap());
    assert_eq!(charlotte.tier(), Tier::Silver);
    // the order placed by Charlotte follows the edited record
    assert_eq!(reloaded.orders()[1].customer(), charlotte);
}
