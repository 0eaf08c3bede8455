//! Subscription plans and checkout.
//!
//! Payment itself happens on the hosted checkout page; the client only asks
//! the backend for a checkout URL and sends the user there.

use vitrine_shared::{ApiError, Plan, PlanTier};

use crate::api_client::ApiClient;
use crate::tracking::{LinkOpener, LinkTarget};
use crate::{log_error, log_info, log_warn};

pub const PAYMENT_ERROR_MESSAGE: &str = "Erro ao processar pagamento";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The free plan needs no payment.
    Skipped,
    /// Hosted checkout URL to redirect to.
    Redirect(String),
}

/// Ordering used to label plans as upgrades: free < premium < vip.
/// Unknown plan ids rank with free.
pub fn plan_rank(plan_id: &str) -> u8 {
    match plan_id {
        "premium" => 1,
        "vip" => 2,
        _ => 0,
    }
}

/// The plan list together with the provider's current subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlansOverview {
    pub plans: Vec<Plan>,
    pub current: PlanTier,
    pub days_remaining: Option<i64>,
}

impl PlansOverview {
    /// Load the plans, then the current subscription. If the subscription
    /// cannot be read the provider is shown as on the free plan.
    pub async fn load(api: &ApiClient) -> Result<Self, ApiError> {
        let plans = api.plans().await?;
        let mut overview = Self {
            plans,
            ..Default::default()
        };
        match api.dashboard_stats().await {
            Ok(stats) => {
                if let Some(plan) = stats.plan {
                    overview.current = plan;
                    overview.days_remaining = stats.days_remaining;
                }
            }
            Err(e) => log_warn!("Failed to load current plan: {e}"),
        }
        Ok(overview)
    }

    pub fn is_current(&self, plan: &Plan) -> bool {
        plan.id == self.current.as_str()
    }

    pub fn is_upgrade(&self, plan: &Plan) -> bool {
        plan_rank(&plan.id) > plan_rank(self.current.as_str())
    }

    /// Remaining-time label for a paid subscription.
    pub fn remaining_label(&self) -> Option<String> {
        if self.current == PlanTier::Free {
            return None;
        }
        self.days_remaining.map(|days| {
            if days > 0 {
                format!("{days} dias restantes")
            } else {
                "Expirado".to_string()
            }
        })
    }
}

/// Ask the backend for a checkout URL for `plan_id`.
pub async fn start_checkout(api: &ApiClient, plan_id: &str) -> Result<CheckoutOutcome, String> {
    if plan_id == PlanTier::Free.as_str() {
        return Ok(CheckoutOutcome::Skipped);
    }
    match api.create_payment(plan_id).await {
        Ok(resp) if resp.success && !resp.init_point.is_empty() => {
            log_info!("Checkout started for plan {plan_id} ({})", resp.preference_id);
            Ok(CheckoutOutcome::Redirect(resp.init_point))
        }
        Ok(_) => {
            log_warn!("Payment creation for plan {plan_id} returned no checkout URL");
            Err(PAYMENT_ERROR_MESSAGE.to_string())
        }
        Err(e) => {
            log_error!("Payment creation for plan {plan_id} failed: {e}");
            Err(e.user_message())
        }
    }
}

/// Start the checkout and, on success, leave the app for the hosted page.
pub async fn checkout(
    api: &ApiClient,
    plan_id: &str,
    opener: &impl LinkOpener,
) -> Result<CheckoutOutcome, String> {
    let outcome = start_checkout(api, plan_id).await?;
    if let CheckoutOutcome::Redirect(url) = &outcome {
        opener.open(url, LinkTarget::SamePage);
    }
    Ok(outcome)
}
