use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::models::{BookingDraft, Order};
use crate::promo::{AppliedPromo, PromoTable};

/// Length of a booking reference
pub const REFERENCE_LEN: usize = 8;

const REFERENCE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Contact details and consent collected on the checkout page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    /// Code the guest applied, if any
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub agreed_to_terms: bool,
}

/// Applies promo codes and turns a booking draft into an order
#[derive(Debug, Clone, Default)]
pub struct CheckoutService {
    promos: PromoTable,
}

impl CheckoutService {
    pub fn new(promos: PromoTable) -> Self {
        Self { promos }
    }

    /// Look up a promo code for the draft. Unknown codes are an error; the
    /// caller shows it and treats the discount as zero.
    pub fn apply_promo(&self, draft: &BookingDraft, code: &str) -> Result<AppliedPromo, CheckoutError> {
        match self.promos.evaluate(code, draft) {
            Some(applied) => {
                info!(code = %applied.code, discount = applied.discount, "Promo code applied");
                Ok(applied)
            }
            None => {
                warn!(code = %code, "Invalid promo code");
                Err(CheckoutError::InvalidPromoCode(code.to_string()))
            }
        }
    }

    /// Validate the form and compose the order.
    pub fn submit(&self, draft: BookingDraft, form: CheckoutForm) -> Result<Order, CheckoutError> {
        self.submit_with_rng(draft, form, &mut rand::thread_rng())
    }

    pub fn submit_with_rng<R: Rng>(
        &self,
        draft: BookingDraft,
        form: CheckoutForm,
        rng: &mut R,
    ) -> Result<Order, CheckoutError> {
        if form.full_name.is_empty() || form.email.is_empty() {
            return Err(CheckoutError::MissingFields);
        }

        if !form.agreed_to_terms {
            return Err(CheckoutError::TermsNotAccepted);
        }

        // Discount is recomputed from the code, never taken from the client.
        let applied = match form.promo_code.as_deref() {
            Some(code) if !code.is_empty() => Some(self.apply_promo(&draft, code)?),
            _ => None,
        };
        let discount = applied.as_ref().map_or(0, |a| a.discount);

        let order = Order::new(
            generate_reference(rng),
            draft,
            form.full_name,
            form.email,
            applied.map(|a| a.code),
            discount,
        )?;

        info!(
            order_id = %order.id,
            reference = %order.reference,
            experience_id = %order.booking.experience_id,
            final_total = order.final_total,
            "Order placed"
        );

        Ok(order)
    }
}

/// Random booking reference of [`REFERENCE_LEN`] characters from `[0-9A-Z]`.
pub fn generate_reference<R: Rng>(rng: &mut R) -> String {
    (0..REFERENCE_LEN)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Please fill all required fields")]
    MissingFields,

    #[error("Please agree to terms and conditions")]
    TermsNotAccepted,

    #[error("Invalid promo code")]
    InvalidPromoCode(String),

    #[error("Invalid booking amounts")]
    InvalidAmounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::draft;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn form(name: &str, email: &str, terms: bool) -> CheckoutForm {
        CheckoutForm {
            full_name: name.to_string(),
            email: email.to_string(),
            promo_code: None,
            agreed_to_terms: terms,
        }
    }

    #[test]
    fn test_reference_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let reference = generate_reference(&mut rng);
            assert_eq!(reference.len(), REFERENCE_LEN);
            assert!(reference.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_submit_without_promo() {
        let service = CheckoutService::default();
        let order = service.submit(draft(), form("Asha Rao", "asha@example.com", true)).unwrap();

        assert_eq!(order.discount, 0);
        assert_eq!(order.final_total, 2118);
        assert_eq!(order.promo_code, None);
        assert_eq!(order.email.expose(), "asha@example.com");
        assert_eq!(order.reference.len(), REFERENCE_LEN);
    }

    #[test]
    fn test_submit_with_promo() {
        let service = CheckoutService::default();
        let mut f = form("Asha Rao", "asha@example.com", true);
        f.promo_code = Some("save10".to_string());

        let order = service.submit(draft(), f).unwrap();
        assert_eq!(order.promo_code.as_deref(), Some("SAVE10"));
        assert_eq!(order.discount, 200);
        assert_eq!(order.final_total, 1918);
    }

    #[test]
    fn test_submit_rejects_missing_fields() {
        let service = CheckoutService::default();
        assert_eq!(
            service.submit(draft(), form("", "asha@example.com", true)).unwrap_err(),
            CheckoutError::MissingFields
        );
        assert_eq!(
            service.submit(draft(), form("Asha Rao", "", true)).unwrap_err(),
            CheckoutError::MissingFields
        );
        // Missing fields are reported before the terms checkbox
        assert_eq!(
            service.submit(draft(), form("", "", false)).unwrap_err(),
            CheckoutError::MissingFields
        );
    }

    #[test]
    fn test_submit_requires_terms() {
        let service = CheckoutService::default();
        let err = service.submit(draft(), form("Asha Rao", "asha@example.com", false)).unwrap_err();
        assert_eq!(err, CheckoutError::TermsNotAccepted);
        assert_eq!(err.to_string(), "Please agree to terms and conditions");
    }

    #[test]
    fn test_submit_rejects_unknown_applied_code() {
        let service = CheckoutService::default();
        let mut f = form("Asha Rao", "asha@example.com", true);
        f.promo_code = Some("BOGUS".to_string());
        assert_eq!(
            service.submit(draft(), f).unwrap_err(),
            CheckoutError::InvalidPromoCode("BOGUS".to_string())
        );
    }

    #[test]
    fn test_submit_rejects_overflowing_draft() {
        let service = CheckoutService::default();
        let mut extreme = draft();
        extreme.subtotal = i64::MIN;
        extreme.taxes = 0;
        extreme.total = i64::MIN;

        let mut f = form("Asha Rao", "asha@example.com", true);
        f.promo_code = Some("FLAT100".to_string());
        assert_eq!(service.submit(extreme, f).unwrap_err(), CheckoutError::InvalidAmounts);

        let mut tampered = draft();
        tampered.total = 1;
        assert_eq!(
            service.submit(tampered, form("Asha Rao", "asha@example.com", true)).unwrap_err(),
            CheckoutError::InvalidAmounts
        );
    }

    #[test]
    fn test_apply_promo() {
        let service = CheckoutService::default();
        assert_eq!(service.apply_promo(&draft(), "FLAT100").unwrap().discount, 100);

        let err = service.apply_promo(&draft(), "NOPE").unwrap_err();
        assert_eq!(err.to_string(), "Invalid promo code");
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let service = CheckoutService::default();
        let a = service
            .submit_with_rng(draft(), form("A", "a@example.com", true), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = service
            .submit_with_rng(draft(), form("A", "a@example.com", true), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a.reference, b.reference);
        assert_ne!(a.id, b.id);
    }
}
