//! Payment service implementation
//!
//! Computes the allowed payment range for a fee against a room and builds
//! the signed redirect URL for the VNPay gateway. The canonicalization
//! (sort by key, percent-encode with `+` for space, join `key=value` with
//! `&`, HMAC-SHA512 over exactly that string, signature appended afterwards
//! and never signed itself) is a wire-compatibility requirement and must not
//! be changed.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use url::Url;

use crate::config::PaymentConfig;
use crate::models::{Fee, Room};
use crate::utils::errors::Result;

/// Gateway protocol version
const VNP_VERSION: &str = "2.1.0";

/// Allowed payment range for a fee applied to a room
///
/// `None` when the room's area or vehicle counts are unset; a fee cannot be
/// computed against incomplete room data. Otherwise `[lower, upper]` shifted
/// by `per_area * area + per_motorbike * motorbike + per_car * car`.
pub fn amount_range(fee: &Fee, room: &Room) -> Option<(f64, f64)> {
    let area = room.area?;
    let motorbike = room.motorbike?;
    let car = room.car?;

    let extra =
        fee.per_area * area + fee.per_motorbike * f64::from(motorbike) + fee.per_car * f64::from(car);

    Some((fee.lower + extra, fee.upper + extra))
}

/// Whether `amount` falls inside the inclusive `[lower, upper]` range
///
/// Written as an inclusion test: a NaN amount fails every comparison and
/// therefore never validates.
pub fn amount_within(amount: f64, lower: f64, upper: f64) -> bool {
    amount >= lower && amount <= upper
}

/// Percent-encode a query value the way the gateway expects (space as `+`)
fn encode_value(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Sorted-and-joined `key=value` string fed to the signer
///
/// `BTreeMap` iteration order gives the lexicographic key ordering the
/// gateway verifies against.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Debug, Clone)]
pub struct PaymentService {
    config: PaymentConfig,
}

impl PaymentService {
    pub fn new(config: PaymentConfig) -> Self {
        Self { config }
    }

    /// Sign the canonical query string with the shared secret
    #[allow(clippy::expect_used)] // HMAC accepts any key size, this cannot fail
    pub fn sign_payload(&self, payload: &str) -> String {
        type HmacSha512 = Hmac<Sha512>;

        let mut mac = HmacSha512::new_from_slice(self.config.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let result = mac.finalize();

        hex::encode(result.into_bytes())
    }

    /// Build the outbound gateway redirect URL
    ///
    /// `now` is the request time in the gateway's timezone (GMT+7); the
    /// payment window expires one hour later.
    pub fn build_redirect_url(
        &self,
        room: i32,
        fee_id: i64,
        amount: f64,
        client_ip: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<Url> {
        let expire = now + Duration::hours(1);

        let mut params = BTreeMap::new();
        params.insert("vnp_Version".to_string(), VNP_VERSION.to_string());
        params.insert("vnp_Command".to_string(), "pay".to_string());
        params.insert("vnp_TmnCode".to_string(), self.config.tmn_code.clone());
        params.insert(
            "vnp_Amount".to_string(),
            ((100.0 * amount).round() as i64).to_string(),
        );
        params.insert("vnp_CreateDate".to_string(), format_time(&now));
        params.insert("vnp_CurrCode".to_string(), "VND".to_string());
        params.insert("vnp_IpAddr".to_string(), client_ip.to_string());
        params.insert("vnp_Locale".to_string(), "vn".to_string());
        params.insert(
            "vnp_OrderInfo".to_string(),
            format!("Thanh toan {room} cho {fee_id}"),
        );
        params.insert("vnp_OrderType".to_string(), "250000".to_string());
        params.insert("vnp_ReturnUrl".to_string(), self.config.return_url.clone());
        params.insert("vnp_ExpireDate".to_string(), format_time(&expire));
        params.insert(
            "vnp_TxnRef".to_string(),
            format!("{room}-{fee_id}-{amount}"),
        );

        let signature = self.sign_payload(&canonical_query(&params));

        let mut url = Url::parse(&self.config.base_url)?;
        url.query_pairs_mut()
            .extend_pairs(params.iter())
            .append_pair("vnp_SecureHash", &signature);

        Ok(url)
    }
}

/// Timestamp format the gateway expects
fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y%m%d%H%M%S").to_string()
}

/// The gateway's timezone (GMT+7)
#[allow(clippy::expect_used)] // 7 * 3600 seconds is always a valid offset
pub fn gateway_timezone() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).expect("valid fixed offset")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_fee() -> Fee {
        Fee {
            fee_id: 3,
            name: "Monthly maintenance".to_string(),
            lower: 100.0,
            upper: 200.0,
            per_area: 1.0,
            per_motorbike: 10.0,
            per_car: 20.0,
            created_at: Utc::now(),
        }
    }

    fn sample_room() -> Room {
        Room {
            room: 101,
            area: Some(10.0),
            motorbike: Some(1),
            car: Some(0),
        }
    }

    fn service() -> PaymentService {
        PaymentService::new(PaymentConfig {
            base_url: "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html".to_string(),
            tmn_code: "TESTCODE".to_string(),
            secret_key: "secret".to_string(),
            return_url: "https://example.com".to_string(),
        })
    }

    #[test]
    fn test_amount_range_example() {
        let (lower, upper) = amount_range(&sample_fee(), &sample_room()).unwrap();
        assert_eq!(lower, 120.0);
        assert_eq!(upper, 220.0);
    }

    #[test]
    fn test_amount_within_boundaries_inclusive() {
        assert!(!amount_within(119.0, 120.0, 220.0));
        assert!(amount_within(120.0, 120.0, 220.0));
        assert!(amount_within(220.0, 120.0, 220.0));
        assert!(!amount_within(221.0, 120.0, 220.0));
    }

    #[test]
    fn test_amount_within_rejects_nan() {
        assert!(!amount_within(f64::NAN, 120.0, 220.0));
        assert!(!amount_within(f64::INFINITY, 120.0, 220.0));
        assert!(!amount_within(f64::NEG_INFINITY, 120.0, 220.0));
    }

    #[test]
    fn test_amount_range_none_on_incomplete_room() {
        let mut room = sample_room();
        room.area = None;
        assert!(amount_range(&sample_fee(), &room).is_none());

        let mut room = sample_room();
        room.car = None;
        assert!(amount_range(&sample_fee(), &room).is_none());
    }

    #[test]
    fn test_canonical_query_is_sorted() {
        let mut params = BTreeMap::new();
        params.insert("vnp_Version".to_string(), "2.1.0".to_string());
        params.insert("vnp_Amount".to_string(), "12000".to_string());
        params.insert("vnp_Command".to_string(), "pay".to_string());

        assert_eq!(
            canonical_query(&params),
            "vnp_Amount=12000&vnp_Command=pay&vnp_Version=2.1.0"
        );
    }

    #[test]
    fn test_canonical_query_encodes_spaces_as_plus() {
        let mut params = BTreeMap::new();
        params.insert(
            "vnp_OrderInfo".to_string(),
            "Thanh toan 101 cho 3".to_string(),
        );

        assert_eq!(
            canonical_query(&params),
            "vnp_OrderInfo=Thanh+toan+101+cho+3"
        );
    }

    #[test]
    fn test_signature_known_vector() {
        // hmac-sha512("secret", "a=1&b=2")
        assert_eq!(
            service().sign_payload("a=1&b=2"),
            "785d7084675f5b7fa7222b1aed28705aa6868ca4b654418f05cbfdf24f6b815d\
             92e5ac964ae579e72eedbe48ac144dd3b5e852787a00d5c0479ce7767a192d38"
        );
    }

    #[test]
    fn test_redirect_url_signature_excludes_itself() {
        let service = service();
        let now = gateway_timezone()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap();

        let url = service
            .build_redirect_url(101, 3, 120.0, "203.0.113.7", now)
            .unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let signature = pairs
            .iter()
            .find(|(k, _)| k == "vnp_SecureHash")
            .map(|(_, v)| v.clone())
            .unwrap();
        assert_eq!(signature.len(), 128);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));

        // Recomputing over every parameter except the signature itself must
        // reproduce the signature
        let signed: BTreeMap<String, String> = pairs
            .into_iter()
            .filter(|(k, _)| k != "vnp_SecureHash")
            .collect();
        assert_eq!(service.sign_payload(&canonical_query(&signed)), signature);
    }

    #[test]
    fn test_redirect_url_fields() {
        let now = gateway_timezone()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap();

        let url = service()
            .build_redirect_url(101, 3, 120.0, "203.0.113.7", now)
            .unwrap();

        let pairs: BTreeMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(pairs["vnp_Amount"], "12000");
        assert_eq!(pairs["vnp_CreateDate"], "20240501120000");
        assert_eq!(pairs["vnp_ExpireDate"], "20240501130000");
        assert_eq!(pairs["vnp_OrderInfo"], "Thanh toan 101 cho 3");
        assert_eq!(pairs["vnp_TmnCode"], "TESTCODE");
        assert_eq!(pairs["vnp_IpAddr"], "203.0.113.7");
    }
}
