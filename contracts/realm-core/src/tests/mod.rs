
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod coin_test;
    pub mod config_test;
    pub mod discovery_test;
    pub mod dispatch_test;
    pub mod equipment_test;
    pub mod events_test;
    pub mod guards_test;
    pub mod player_test;
    pub mod randomness_test;
    pub mod ring_test;
    pub mod storage_test;
    pub mod token_test;
    pub mod town_test;
}
