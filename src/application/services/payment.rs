//! Payment stub
//!
//! No payment gateway is integrated. Purchases and link copies only emit a
//! notification through the injected [`Notifier`].

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::domain::{BakerOffer, UserProfile};
use crate::infrastructure::traits::{Notification, Notifier};

pub struct PaymentService {
    notifier: Arc<dyn Notifier>,
}

impl PaymentService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// "Buy BAKER": announce the pending payment integration.
    pub fn buy_baker(&self, offer: &BakerOffer) -> Notification {
        info!("buy_baker: price={} remaining_slots={}", offer.price, offer.remaining_slots());
        let notification = Notification {
            title: "Payment system".to_string(),
            body: format!(
                "Payment system integration for buying BAKER for {} is coming soon",
                offer.price
            ),
            duration: Some(Duration::from_secs(5)),
        };
        self.notifier.notify(&notification);
        notification
    }

    pub fn copy_referral_link(&self, user: &UserProfile) -> Notification {
        info!("copy_referral_link: user={}", user.name);
        let notification = Notification {
            title: "Copied!".to_string(),
            body: format!("Referral link copied: {}", user.referral_link),
            duration: None,
        };
        self.notifier.notify(&notification);
        notification
    }
}
