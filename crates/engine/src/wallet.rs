//! The wallet: a running total of every value computed for a vault.
//!
//! All reads and writes of the settings go through a single async mutex, so
//! two appraisals finishing at the same time both land in the total. The
//! in-memory copy is only updated once the store has accepted the new
//! settings.

use tokio::sync::Mutex;

use crate::{ResultEngine, Settings, SettingsStore};

#[derive(Debug)]
pub struct Wallet<P> {
    settings: Mutex<Settings>,
    store: P,
}

impl<P: SettingsStore> Wallet<P> {
    /// Loads the settings from `store`.
    pub async fn open(store: P) -> ResultEngine<Self> {
        let settings = store.load().await?;
        tracing::debug!(
            "wallet opened with {} ({})",
            settings.wallet_value,
            settings.currency
        );
        Ok(Self {
            settings: Mutex::new(settings),
            store,
        })
    }

    pub async fn settings(&self) -> Settings {
        self.settings.lock().await.clone()
    }

    pub async fn balance(&self) -> f64 {
        self.settings.lock().await.wallet_value
    }

    /// Adds `raw` to the wallet, persists, and returns the new total.
    pub async fn deposit(&self, raw: f64) -> ResultEngine<f64> {
        let settings = self
            .update(|settings| settings.wallet_value += raw)
            .await?;
        Ok(settings.wallet_value)
    }

    /// Applies `change` to the settings and persists the result.
    pub async fn update<F>(&self, change: F) -> ResultEngine<Settings>
    where
        F: FnOnce(&mut Settings) + Send,
    {
        let mut current = self.settings.lock().await;
        let mut next = current.clone();
        change(&mut next);
        self.store.save(&next).await?;
        *current = next;
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::MemorySettingsStore;

    #[tokio::test]
    async fn sequential_deposits_accumulate() {
        let store = MemorySettingsStore::default();
        let wallet = Wallet::open(store.clone()).await.unwrap();
        let raws = [0.25, 1.5, 3.125];
        for raw in raws {
            wallet.deposit(raw).await.unwrap();
        }

        assert_eq!(wallet.balance().await, 4.875);
        assert_eq!(store.snapshot().wallet_value, 4.875);
        assert_eq!(store.saves(), 3);
    }

    #[tokio::test]
    async fn opening_resumes_from_stored_total() {
        let store = MemorySettingsStore::new(Settings {
            wallet_value: 10.0,
            ..Settings::default()
        });
        let wallet = Wallet::open(store).await.unwrap();
        assert_eq!(wallet.deposit(2.5).await.unwrap(), 12.5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_deposits_are_not_lost() {
        let store = MemorySettingsStore::default();
        let wallet = Arc::new(Wallet::open(store.clone()).await.unwrap());

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..64 {
            let wallet = Arc::clone(&wallet);
            tasks.spawn(async move { wallet.deposit(0.5).await });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }

        assert_eq!(wallet.balance().await, 32.0);
        assert_eq!(store.snapshot().wallet_value, 32.0);
        assert_eq!(store.saves(), 64);
    }

    #[tokio::test]
    async fn update_keeps_wallet() {
        let wallet = Wallet::open(MemorySettingsStore::default()).await.unwrap();
        wallet.deposit(1.0).await.unwrap();
        let settings = wallet
            .update(|settings| settings.currency = "EUR".to_string())
            .await
            .unwrap();
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.wallet_value, 1.0);
    }
}
