//! Randomized `Customer` generators (proptest strategies).
//!
//! The length and pattern rules below describe the shape of *sample* data.
//! `Customer` itself accepts any value.

use core::ops::RangeInclusive;

use proptest::prelude::*;

use customer_core::testing::{bounded_string, digit_string, AuditModel};
use customer_core::Audited;

use crate::customer::{Customer, CustomerDetails};

const TOP_LEVEL_DOMAINS: &[&str] = &["com", "org", "net", "io"];

fn lowercase(min: usize, max: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), min..=max)
        .prop_map(|chars| chars.into_iter().collect())
        .boxed()
}

/// `local@domain.tld`, lowercase.
pub fn email() -> BoxedStrategy<String> {
    (
        lowercase(3, 12),
        lowercase(3, 10),
        proptest::sample::select(TOP_LEVEL_DOMAINS),
    )
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
        .boxed()
}

/// `<digit> <uppercase letter> Street`.
pub fn street_address() -> BoxedStrategy<String> {
    (proptest::char::range('0', '9'), proptest::char::range('A', 'Z'))
        .prop_map(|(digit, letter)| format!("{digit} {letter} Street"))
        .boxed()
}

/// How a free-text attribute is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRule {
    /// Uppercase letters, length within the range.
    Length(RangeInclusive<usize>),
    /// ASCII digits only, length within the range.
    Digits(RangeInclusive<usize>),
    /// Always this value.
    Fixed(String),
    /// One of the listed values.
    OneOf(Vec<String>),
    /// Never set.
    Absent,
}

impl TextRule {
    pub fn strategy(&self) -> BoxedStrategy<Option<String>> {
        match self {
            TextRule::Length(len) => bounded_string(*len.start(), *len.end())
                .prop_map(Some)
                .boxed(),
            TextRule::Digits(len) => digit_string(*len.start(), *len.end())
                .prop_map(Some)
                .boxed(),
            TextRule::Fixed(value) => Just(Some(value.clone())).boxed(),
            TextRule::OneOf(values) if values.is_empty() => Just(None).boxed(),
            TextRule::OneOf(values) => proptest::sample::select(values.clone())
                .prop_map(Some)
                .boxed(),
            TextRule::Absent => Just(None).boxed(),
        }
    }
}

/// Reusable generation rules for [`Customer`].
///
/// Defaults: first name 3..=20, last name 3..=25, city and country 3..=30
/// uppercase characters; phone 10..=15 and postal code 5..=10 digits; a
/// well-formed email; a `"<d> <C> Street"` address; audit fields from
/// [`AuditModel::past`].
#[derive(Debug, Clone)]
pub struct CustomerModel {
    first_name: TextRule,
    last_name: TextRule,
    phone_number: TextRule,
    city: TextRule,
    country: TextRule,
    postal_code: TextRule,
    email_domain: Option<String>,
    address: bool,
    audit: AuditModel,
}

impl Default for CustomerModel {
    fn default() -> Self {
        Self {
            first_name: TextRule::Length(3..=20),
            last_name: TextRule::Length(3..=25),
            phone_number: TextRule::Digits(10..=15),
            city: TextRule::Length(3..=30),
            country: TextRule::Length(3..=30),
            postal_code: TextRule::Digits(5..=10),
            email_domain: None,
            address: true,
            audit: AuditModel::new().by_len(5..=15).past(),
        }
    }
}

impl CustomerModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, rule: TextRule) -> Self {
        self.first_name = rule;
        self
    }

    pub fn last_name(mut self, rule: TextRule) -> Self {
        self.last_name = rule;
        self
    }

    pub fn phone_number(mut self, rule: TextRule) -> Self {
        self.phone_number = rule;
        self
    }

    pub fn city(mut self, rule: TextRule) -> Self {
        self.city = rule;
        self
    }

    pub fn country(mut self, rule: TextRule) -> Self {
        self.country = rule;
        self
    }

    pub fn postal_code(mut self, rule: TextRule) -> Self {
        self.postal_code = rule;
        self
    }

    /// Replace everything from `@` onwards in generated emails, e.g. `"@gmail.com"`.
    pub fn email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = Some(domain.into());
        self
    }

    /// Leave `address` unset.
    pub fn without_address(mut self) -> Self {
        self.address = false;
        self
    }

    pub fn audit(mut self, audit: AuditModel) -> Self {
        self.audit = audit;
        self
    }

    pub fn strategy(&self) -> BoxedStrategy<Customer> {
        let domain = self.email_domain.clone();
        let email = email().prop_map(move |generated| match &domain {
            Some(domain) => {
                let local = generated.split('@').next().unwrap_or_default();
                Some(format!("{local}{domain}"))
            }
            None => Some(generated),
        });
        let address = if self.address {
            street_address().prop_map(Some).boxed()
        } else {
            Just(None).boxed()
        };

        (
            self.audit.strategy(),
            self.first_name.strategy(),
            self.last_name.strategy(),
            email,
            self.phone_number.strategy(),
            address,
            self.city.strategy(),
            self.country.strategy(),
            self.postal_code.strategy(),
        )
            .prop_map(
                |(
                    audit,
                    first_name,
                    last_name,
                    email,
                    phone_number,
                    address,
                    city,
                    country,
                    postal_code,
                )| {
                    let mut customer = Customer::from_details(CustomerDetails {
                        first_name,
                        last_name,
                        email,
                        phone_number,
                        address,
                        city,
                        country,
                        postal_code,
                    });
                    *customer.audit_mut() = audit;
                    customer
                },
            )
            .boxed()
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use chrono::Utc;
    use customer_core::Entity;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    fn all_digits(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn independent_customers_differ() {
        let mut runner = TestRunner::default();
        let strategy = CustomerModel::new().strategy();

        let first = strategy.new_tree(&mut runner).unwrap().current();
        let second = strategy.new_tree(&mut runner).unwrap().current();

        assert_ne!(first.first_name(), second.first_name());
        assert_ne!(first.last_name(), second.last_name());
        assert_ne!(first.email(), second.email());
        assert_ne!(first.phone_number(), second.phone_number());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn model_customers_follow_generation_rules(customer in CustomerModel::new().strategy()) {
            prop_assert!(customer.id().is_some());
            prop_assert!((3..=20).contains(&customer.first_name().unwrap().len()));
            prop_assert!((3..=25).contains(&customer.last_name().unwrap().len()));
            prop_assert!(customer.email().unwrap().contains('@'));

            let phone = customer.phone_number().unwrap();
            prop_assert!(all_digits(phone));
            prop_assert!((10..=15).contains(&phone.len()));

            let postal = customer.postal_code().unwrap();
            prop_assert!(all_digits(postal));
            prop_assert!((5..=10).contains(&postal.len()));

            prop_assert!(customer.address().unwrap().ends_with(" Street"));
            prop_assert!((3..=30).contains(&customer.city().unwrap().len()));
            prop_assert!((3..=30).contains(&customer.country().unwrap().len()));
            prop_assert!(customer.created_by().is_some());
            prop_assert!(customer.created_at().unwrap() < Utc::now().naive_utc());
        }

        #[test]
        fn model_lists_are_fully_populated(
            customers in proptest::collection::vec(CustomerModel::new().strategy(), 10)
        ) {
            prop_assert_eq!(customers.len(), 10);
            for customer in &customers {
                prop_assert!(customer.id().is_some());
                prop_assert!(customer.details().first_name.is_some());
                prop_assert!(customer.details().last_name.is_some());
                prop_assert!(customer.details().email.is_some());
                prop_assert!(customer.details().phone_number.is_some());
                prop_assert!(customer.details().address.is_some());
                prop_assert!(customer.details().city.is_some());
                prop_assert!(customer.details().country.is_some());
                prop_assert!(customer.details().postal_code.is_some());
                prop_assert!(customer.created_by().is_some());
                prop_assert!(customer.created_at().unwrap() <= Utc::now().naive_utc());
            }
        }

        #[test]
        fn fixed_length_phone_and_postal_code(
            customer in CustomerModel::new()
                .phone_number(TextRule::Digits(10..=10))
                .postal_code(TextRule::Digits(5..=5))
                .strategy()
        ) {
            let phone = customer.phone_number().unwrap();
            prop_assert_eq!(phone.len(), 10);
            prop_assert!(all_digits(phone));
            prop_assert!(customer.address().unwrap().contains("Street"));
            let postal = customer.postal_code().unwrap();
            prop_assert_eq!(postal.len(), 5);
            prop_assert!(all_digits(postal));
        }

        #[test]
        fn email_domain_is_rewritten(
            customer in CustomerModel::new()
                .first_name(TextRule::Length(5..=15))
                .last_name(TextRule::Length(5..=15))
                .email_domain("@gmail.com")
                .strategy()
        ) {
            let email = customer.email().unwrap();
            prop_assert!(email.ends_with("@gmail.com"));
            prop_assert_eq!(email.matches('@').count(), 1);
            prop_assert!((5..=15).contains(&customer.first_name().unwrap().len()));
            prop_assert!((5..=15).contains(&customer.last_name().unwrap().len()));
        }

        #[test]
        fn forced_country_with_five_digit_postal_code(
            customer in CustomerModel::new()
                .country(TextRule::Fixed("USA".to_string()))
                .postal_code(TextRule::Digits(5..=5))
                .strategy()
        ) {
            prop_assert_eq!(customer.country(), Some("USA"));
            let postal = customer.postal_code().unwrap();
            prop_assert_eq!(postal.len(), 5);
            prop_assert!(all_digits(postal));
        }

        #[test]
        fn cleared_address_is_absent(
            customer in CustomerModel::new().without_address().strategy()
        ) {
            prop_assert!(customer.address().is_none());
        }

        #[test]
        fn country_drawn_from_fixed_set(
            customers in proptest::collection::vec(
                CustomerModel::new()
                    .country(TextRule::OneOf(vec![
                        "USA".to_string(),
                        "Canada".to_string(),
                        "Mexico".to_string(),
                    ]))
                    .strategy(),
                3,
            )
        ) {
            prop_assert_eq!(customers.len(), 3);
            for customer in &customers {
                prop_assert!(customer.first_name().is_some());
                prop_assert!(customer.last_name().is_some());
                prop_assert!(customer.email().is_some());
                prop_assert!(matches!(customer.country(), Some("USA" | "Canada" | "Mexico")));
            }
        }

        #[test]
        fn conditional_first_name(
            customer in CustomerModel::new()
                .first_name(TextRule::Length(10..=10))
                .strategy()
                .prop_filter("first name must start with J", |c| {
                    c.first_name().is_some_and(|n| n.starts_with('J'))
                })
        ) {
            prop_assert!(customer.first_name().unwrap().starts_with('J'));
        }

        #[test]
        fn inherits_audit_fields(
            customer in CustomerModel::new()
                .audit(AuditModel::new().by_len(5..=15).past())
                .strategy()
        ) {
            let now = Utc::now().naive_utc();
            prop_assert!(customer.created_at().unwrap() < now);
            prop_assert!(customer.updated_at().unwrap() < now);
            prop_assert!((5..=15).contains(&customer.created_by().unwrap().len()));
            prop_assert!((5..=15).contains(&customer.updated_by().unwrap().len()));
        }

        #[test]
        fn reversed_rule_ranges_still_generate(
            customer in CustomerModel::new()
                .first_name(TextRule::Length(RangeInclusive::new(12, 4)))
                .phone_number(TextRule::Digits(RangeInclusive::new(11, 10)))
                .strategy()
        ) {
            prop_assert!((4..=12).contains(&customer.first_name().unwrap().len()));
            let phone = customer.phone_number().unwrap();
            prop_assert!(all_digits(phone));
            prop_assert!((10..=11).contains(&phone.len()));
        }

        #[test]
        fn absent_rule_leaves_field_unset(
            customer in CustomerModel::new().city(TextRule::Absent).strategy()
        ) {
            prop_assert!(customer.city().is_none());
        }
    }
}
