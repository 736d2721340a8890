//! Subscription draft and its reducer.
//!
//! A form edits a draft as a single immutable value. Every change goes
//! through [`SubscriptionDraft::apply`], which rebuilds the derived fields
//! (end date, next renewal, total, local-currency amount), so they can never
//! drift from their sources.
//!
//! Text the form sent for a typed field that does not parse is kept in
//! `rejected_inputs`, so validation can point at it instead of treating the
//! field as never filled in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::billing::{compute_end_date, next_renewal_date, BillingCycle};
use crate::domain::fields::{FieldSchema, FieldType, FieldValue};
use crate::domain::foundation::{CalendarDate, SubscriptionDraftId, ValidationError};
use crate::domain::validation::validate_email;

use super::currency::Currency;

/// Inputs the derived fields depend on besides the draft itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeContext {
    /// Date used to locate the current period for `next_renewal`.
    pub as_of: CalendarDate,
    /// Tenant's local currency.
    pub local_currency: Currency,
}

/// Working copy of a subscription record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDraft {
    #[serde(default)]
    pub id: SubscriptionDraftId,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub start_date: Option<CalendarDate>,
    #[serde(default)]
    pub billing_cycle: Option<BillingCycle>,
    /// Price per unit in minor units of `currency`.
    #[serde(default)]
    pub amount_cents: Option<i64>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Billing currency. Absent means the tenant's local currency.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Units of billing currency per one unit of local currency.
    #[serde(default)]
    pub exchange_rate: Option<f64>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, FieldValue>,
    /// Raw text of date, cycle and currency inputs that did not parse, by field.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rejected_inputs: BTreeMap<String, String>,

    // Derived. Always overwritten by `recompute`.
    #[serde(default)]
    pub end_date: Option<CalendarDate>,
    #[serde(default)]
    pub next_renewal: Option<CalendarDate>,
    #[serde(default)]
    pub total_amount_cents: Option<i64>,
    #[serde(default)]
    pub lcy_amount_cents: Option<i64>,
}

fn default_quantity() -> u32 {
    1
}

impl Default for SubscriptionDraft {
    fn default() -> Self {
        Self {
            id: SubscriptionDraftId::new(),
            service_name: String::new(),
            vendor: None,
            owner_email: None,
            start_date: None,
            billing_cycle: None,
            amount_cents: None,
            quantity: default_quantity(),
            currency: None,
            exchange_rate: None,
            custom_fields: BTreeMap::new(),
            rejected_inputs: BTreeMap::new(),
            end_date: None,
            next_renewal: None,
            total_amount_cents: None,
            lcy_amount_cents: None,
        }
    }
}

/// A single edit made on the form.
///
/// Date, cycle and currency arrive as raw strings and are parsed leniently:
/// input that does not parse leaves the field empty and is recorded in
/// `rejected_inputs`. `SetCustomFieldRaw` carries form text that
/// [`DraftChange::typed_against`] turns into a typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftChange {
    ServiceName(String),
    Vendor(Option<String>),
    OwnerEmail(Option<String>),
    StartDate(Option<String>),
    BillingCycle(Option<String>),
    AmountCents(Option<i64>),
    Quantity(u32),
    Currency(Option<String>),
    ExchangeRate(Option<f64>),
    SetCustomField { name: String, value: FieldValue },
    SetCustomFieldRaw { name: String, raw: String },
    ClearCustomField { name: String },
}

impl DraftChange {
    /// Types raw custom-field text against the schema.
    ///
    /// Blank text clears the field. A name the schema does not declare keeps
    /// the text as-is so validation reports the unknown field. Every other
    /// change passes through unchanged.
    pub fn typed_against(self, schema: &FieldSchema) -> Result<DraftChange, ValidationError> {
        let (name, raw) = match self {
            DraftChange::SetCustomFieldRaw { name, raw } => (name, raw),
            other => return Ok(other),
        };
        if raw.trim().is_empty() {
            return Ok(DraftChange::ClearCustomField { name });
        }
        let field_type = schema.get(&name).map_or(FieldType::Text, |def| def.field_type);
        let value = FieldValue::coerce(&custom_field_key(&name), &raw, field_type)?;
        Ok(DraftChange::SetCustomField { name, value })
    }
}

/// Issue key for a custom field.
fn custom_field_key(name: &str) -> String {
    format!("custom_fields.{}", name)
}

/// A problem that blocks saving the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftIssue {
    pub field: String,
    pub message: String,
}

impl DraftIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for DraftIssue {
    fn from(err: ValidationError) -> Self {
        DraftIssue::new(err.field(), err.to_string())
    }
}

const START_DATE: &str = "start_date";
const BILLING_CYCLE: &str = "billing_cycle";
const CURRENCY: &str = "currency";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl SubscriptionDraft {
    /// Applies one change and recomputes the derived fields.
    pub fn apply(self, change: DraftChange, ctx: &RecomputeContext) -> Self {
        self.with_change(change).recompute(ctx)
    }

    /// Applies changes in order, recomputing after each.
    pub fn apply_all<I>(self, changes: I, ctx: &RecomputeContext) -> Self
    where
        I: IntoIterator<Item = DraftChange>,
    {
        changes
            .into_iter()
            .fold(self.recompute(ctx), |draft, change| draft.apply(change, ctx))
    }

    fn with_change(mut self, change: DraftChange) -> Self {
        match change {
            DraftChange::ServiceName(name) => self.service_name = name,
            DraftChange::Vendor(vendor) => self.vendor = non_blank(vendor),
            DraftChange::OwnerEmail(email) => self.owner_email = non_blank(email),
            DraftChange::StartDate(raw) => {
                self.start_date = CalendarDate::parse_lenient(raw.as_deref());
                self.track_rejected(START_DATE, raw, self.start_date.is_some());
            }
            DraftChange::BillingCycle(raw) => {
                self.billing_cycle = BillingCycle::parse_lenient(raw.as_deref());
                self.track_rejected(BILLING_CYCLE, raw, self.billing_cycle.is_some());
            }
            DraftChange::AmountCents(amount) => self.amount_cents = amount,
            DraftChange::Quantity(quantity) => self.quantity = quantity,
            DraftChange::Currency(raw) => {
                self.currency = raw.as_deref().and_then(|c| Currency::new(c).ok());
                self.track_rejected(CURRENCY, raw, self.currency.is_some());
            }
            DraftChange::ExchangeRate(rate) => self.exchange_rate = rate,
            DraftChange::SetCustomField { name, value } => {
                self.custom_fields.insert(name, value);
            }
            // Untyped here; callers resolve it with `typed_against` first.
            DraftChange::SetCustomFieldRaw { name, raw } => {
                self.custom_fields.insert(name, FieldValue::Text(raw));
            }
            DraftChange::ClearCustomField { name } => {
                self.custom_fields.remove(&name);
            }
        }
        self
    }

    fn track_rejected(&mut self, field: &str, raw: Option<String>, parsed: bool) {
        match non_blank(raw) {
            Some(raw) if !parsed => {
                self.rejected_inputs.insert(field.to_string(), raw.trim().to_string());
            }
            _ => {
                self.rejected_inputs.remove(field);
            }
        }
    }

    fn rejected(&self, field: &str) -> Option<&str> {
        self.rejected_inputs.get(field).map(String::as_str)
    }

    /// Rebuilds every derived field from the source fields.
    ///
    /// Idempotent: `d.recompute(ctx).recompute(ctx) == d.recompute(ctx)`.
    pub fn recompute(mut self, ctx: &RecomputeContext) -> Self {
        let term = self.start_date.zip(self.billing_cycle);

        self.end_date = term.and_then(|(start, cycle)| compute_end_date(start, cycle));
        self.next_renewal =
            term.and_then(|(start, cycle)| next_renewal_date(start, cycle, ctx.as_of));
        self.total_amount_cents = self
            .amount_cents
            .map(|amount| amount.saturating_mul(i64::from(self.quantity)));
        self.lcy_amount_cents = self
            .total_amount_cents
            .and_then(|total| self.to_local(total, &ctx.local_currency));
        self
    }

    fn is_local_currency(&self, local: &Currency) -> bool {
        self.currency.as_ref().map_or(true, |c| c == local)
    }

    fn to_local(&self, total: i64, local: &Currency) -> Option<i64> {
        // An unreadable currency is not the local one.
        if self.rejected(CURRENCY).is_some() {
            return None;
        }
        if self.is_local_currency(local) {
            return Some(total);
        }
        let rate = self.exchange_rate.filter(|r| r.is_finite() && *r > 0.0)?;
        let converted = (total as f64 / rate).round();
        converted.is_finite().then_some(converted as i64)
    }

    /// Checks the draft is ready to save.
    pub fn validate(&self, schema: &FieldSchema, ctx: &RecomputeContext) -> Vec<DraftIssue> {
        let mut issues = Vec::new();

        if self.service_name.trim().is_empty() {
            issues.push(ValidationError::empty_field("service_name").into());
        }
        if let Some(email) = &self.owner_email {
            if let Err(err) = validate_email("owner_email", email) {
                issues.push(err.into());
            }
        }
        match (self.start_date, self.rejected(START_DATE)) {
            (None, Some(raw)) => issues.push(
                ValidationError::invalid_format(START_DATE, format!("'{}' is not YYYY-MM-DD", raw))
                    .into(),
            ),
            (None, None) => issues.push(ValidationError::empty_field(START_DATE).into()),
            (Some(_), _) => {}
        }
        match (self.billing_cycle, self.rejected(BILLING_CYCLE)) {
            (None, Some(raw)) => issues.push(
                ValidationError::invalid_format(
                    BILLING_CYCLE,
                    format!("'{}' is not a known billing cycle", raw),
                )
                .into(),
            ),
            (None, None) => issues.push(ValidationError::empty_field(BILLING_CYCLE).into()),
            (Some(_), _) => {}
        }
        if let Some(raw) = self.rejected(CURRENCY) {
            issues.push(ValidationError::unsupported_value(CURRENCY, raw).into());
        }
        if self.quantity == 0 {
            issues.push(
                ValidationError::out_of_range("quantity", 1, i64::from(u32::MAX), 0).into(),
            );
        }
        if let Some(amount) = self.amount_cents {
            if amount < 0 {
                issues.push(DraftIssue::new("amount_cents", "Amount cannot be negative"));
            }
        }
        if !self.is_local_currency(&ctx.local_currency)
            && !self.exchange_rate.map_or(false, |r| r.is_finite() && r > 0.0)
        {
            issues.push(DraftIssue::new(
                "exchange_rate",
                format!(
                    "A positive exchange rate to {} is required for {} subscriptions",
                    ctx.local_currency,
                    self.currency.as_ref().map(Currency::as_str).unwrap_or_default()
                ),
            ));
        }

        issues.extend(
            schema
                .check(&self.custom_fields)
                .into_iter()
                .map(|issue| DraftIssue::new(custom_field_key(issue.field()), issue.to_string())),
        );

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{FieldDefinition, FieldEntity, FieldType};

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn ctx() -> RecomputeContext {
        RecomputeContext {
            as_of: date("2024-03-10"),
            local_currency: Currency::new("USD").unwrap(),
        }
    }

    fn filled_draft() -> SubscriptionDraft {
        SubscriptionDraft::default().apply_all(
            vec![
                DraftChange::ServiceName("Figma".into()),
                DraftChange::OwnerEmail(Some("it@example.com".into())),
                DraftChange::StartDate(Some("2024-01-15".into())),
                DraftChange::BillingCycle(Some("monthly".into())),
                DraftChange::AmountCents(Some(1_500)),
                DraftChange::Quantity(4),
            ],
            &ctx(),
        )
    }

    #[test]
    fn derives_end_date_and_next_renewal() {
        let draft = filled_draft();
        assert_eq!(draft.end_date, Some(date("2024-02-14")));
        assert_eq!(draft.next_renewal, Some(date("2024-03-15")));
    }

    #[test]
    fn changing_cycle_recomputes_end_date() {
        let draft = filled_draft().apply(DraftChange::BillingCycle(Some("yearly".into())), &ctx());
        assert_eq!(draft.end_date, Some(date("2025-01-14")));
        assert_eq!(draft.next_renewal, Some(date("2025-01-15")));
    }

    #[test]
    fn clearing_start_date_clears_derived_dates() {
        let draft = filled_draft().apply(DraftChange::StartDate(None), &ctx());
        assert_eq!(draft.end_date, None);
        assert_eq!(draft.next_renewal, None);
    }

    #[test]
    fn unparseable_start_date_is_not_computable() {
        let draft = filled_draft().apply(DraftChange::StartDate(Some("soon".into())), &ctx());
        assert_eq!(draft.start_date, None);
        assert_eq!(draft.end_date, None);
    }

    #[test]
    fn pay_as_you_go_has_no_end_or_renewal() {
        let draft =
            filled_draft().apply(DraftChange::BillingCycle(Some("pay-as-you-go".into())), &ctx());
        assert_eq!(draft.billing_cycle, Some(BillingCycle::PayAsYouGo));
        assert_eq!(draft.end_date, None);
        assert_eq!(draft.next_renewal, None);
    }

    #[test]
    fn total_follows_amount_and_quantity() {
        let draft = filled_draft();
        assert_eq!(draft.total_amount_cents, Some(6_000));
        assert_eq!(draft.lcy_amount_cents, Some(6_000));

        let draft = draft.apply(DraftChange::Quantity(10), &ctx());
        assert_eq!(draft.total_amount_cents, Some(15_000));
    }

    #[test]
    fn foreign_currency_uses_exchange_rate() {
        let draft = filled_draft()
            .apply(DraftChange::Currency(Some("inr".into())), &ctx())
            .apply(DraftChange::ExchangeRate(Some(83.0)), &ctx());
        assert_eq!(draft.currency, Some(Currency::new("INR").unwrap()));
        // 6000 / 83 = 72.289...
        assert_eq!(draft.lcy_amount_cents, Some(72));
    }

    #[test]
    fn foreign_currency_without_rate_has_no_lcy_amount() {
        let draft = filled_draft().apply(DraftChange::Currency(Some("EUR".into())), &ctx());
        assert_eq!(draft.lcy_amount_cents, None);

        let draft = draft.apply(DraftChange::ExchangeRate(Some(0.0)), &ctx());
        assert_eq!(draft.lcy_amount_cents, None);
    }

    #[test]
    fn unreadable_currency_blocks_local_amount() {
        let draft = filled_draft().apply_all(
            vec![
                DraftChange::AmountCents(Some(100_000)),
                DraftChange::Currency(Some("EURO".into())),
            ],
            &ctx(),
        );
        assert_eq!(draft.currency, None);
        assert_eq!(draft.total_amount_cents, Some(400_000));
        assert_eq!(draft.lcy_amount_cents, None);

        let schema = FieldSchema::empty(FieldEntity::Subscription);
        let issues = draft.validate(&schema, &ctx());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "currency");
        assert!(issues[0].message.contains("EURO"), "{}", issues[0].message);
    }

    #[test]
    fn correcting_currency_clears_rejection() {
        let draft = filled_draft()
            .apply(DraftChange::Currency(Some("EURO".into())), &ctx())
            .apply(DraftChange::Currency(Some("usd".into())), &ctx());
        assert!(draft.rejected_inputs.is_empty());
        assert_eq!(draft.lcy_amount_cents, Some(6_000));
    }

    #[test]
    fn unknown_cycle_is_reported_as_invalid_not_empty() {
        let schema = FieldSchema::empty(FieldEntity::Subscription);
        let draft =
            filled_draft().apply(DraftChange::BillingCycle(Some("fortnightly".into())), &ctx());
        assert_eq!(draft.billing_cycle, None);
        assert_eq!(draft.end_date, None);

        let issues = draft.validate(&schema, &ctx());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "billing_cycle");
        assert!(issues[0].message.contains("invalid format"), "{}", issues[0].message);
        assert!(issues[0].message.contains("fortnightly"));
    }

    #[test]
    fn unparseable_start_date_is_reported_as_invalid() {
        let schema = FieldSchema::empty(FieldEntity::Subscription);
        let draft = filled_draft().apply(DraftChange::StartDate(Some("next week".into())), &ctx());
        let issues = draft.validate(&schema, &ctx());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'next week' is not YYYY-MM-DD"));

        let cleared = draft.apply(DraftChange::StartDate(None), &ctx());
        let issues = cleared.validate(&schema, &ctx());
        assert_eq!(issues[0].message, "Field 'start_date' cannot be empty");
    }

    #[test]
    fn raw_custom_field_is_typed_by_schema() {
        let schema = FieldSchema::new(
            FieldEntity::Subscription,
            vec![
                FieldDefinition::new("seats", FieldType::Number),
                FieldDefinition::new("auto_renew", FieldType::Boolean),
            ],
        );
        let raw = |name: &str, raw: &str| DraftChange::SetCustomFieldRaw {
            name: name.into(),
            raw: raw.into(),
        };

        assert_eq!(
            raw("seats", " 12 ").typed_against(&schema),
            Ok(DraftChange::SetCustomField {
                name: "seats".into(),
                value: FieldValue::Number(12.0),
            })
        );
        assert_eq!(
            raw("auto_renew", "yes").typed_against(&schema),
            Ok(DraftChange::SetCustomField {
                name: "auto_renew".into(),
                value: FieldValue::Bool(true),
            })
        );
        assert_eq!(
            raw("seats", "  ").typed_against(&schema),
            Ok(DraftChange::ClearCustomField {
                name: "seats".into()
            })
        );
        assert_eq!(
            raw("notes", "hello").typed_against(&schema),
            Ok(DraftChange::SetCustomField {
                name: "notes".into(),
                value: FieldValue::Text("hello".into()),
            })
        );

        let err = raw("seats", "ten").typed_against(&schema).unwrap_err();
        assert_eq!(err.field(), "custom_fields.seats");
    }

    #[test]
    fn recompute_is_idempotent() {
        let once = filled_draft();
        let twice = once.clone().recompute(&ctx());
        assert_eq!(once, twice);
    }

    #[test]
    fn recompute_overwrites_stale_derived_values() {
        let mut stale = filled_draft();
        stale.end_date = Some(date("1999-01-01"));
        stale.total_amount_cents = Some(1);
        let fixed = stale.recompute(&ctx());
        assert_eq!(fixed.end_date, Some(date("2024-02-14")));
        assert_eq!(fixed.total_amount_cents, Some(6_000));
    }

    #[test]
    fn custom_fields_can_be_set_and_cleared() {
        let draft = filled_draft().apply(
            DraftChange::SetCustomField {
                name: "cost_center".into(),
                value: FieldValue::Text("ENG".into()),
            },
            &ctx(),
        );
        assert_eq!(
            draft.custom_fields.get("cost_center"),
            Some(&FieldValue::Text("ENG".into()))
        );

        let draft = draft.apply(
            DraftChange::ClearCustomField {
                name: "cost_center".into(),
            },
            &ctx(),
        );
        assert!(draft.custom_fields.is_empty());
    }

    #[test]
    fn valid_draft_has_no_issues() {
        let schema = FieldSchema::empty(FieldEntity::Subscription);
        assert!(filled_draft().validate(&schema, &ctx()).is_empty());
    }

    #[test]
    fn empty_draft_reports_required_fields() {
        let schema = FieldSchema::empty(FieldEntity::Subscription);
        let issues = SubscriptionDraft::default().validate(&schema, &ctx());
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["service_name", "start_date", "billing_cycle"]);
    }

    #[test]
    fn reports_bad_email_quantity_and_rate() {
        let schema = FieldSchema::empty(FieldEntity::Subscription);
        let draft = filled_draft().apply_all(
            vec![
                DraftChange::OwnerEmail(Some("it-at-example".into())),
                DraftChange::Quantity(0),
                DraftChange::Currency(Some("EUR".into())),
            ],
            &ctx(),
        );
        let fields: Vec<String> = draft
            .validate(&schema, &ctx())
            .into_iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(fields, vec!["owner_email", "quantity", "exchange_rate"]);
    }

    #[test]
    fn reports_custom_field_issues_with_prefix() {
        let schema = FieldSchema::new(
            FieldEntity::Subscription,
            vec![FieldDefinition::new("cost_center", FieldType::Text).required()],
        );
        let issues = filled_draft().validate(&schema, &ctx());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "custom_fields.cost_center");
    }

    #[test]
    fn change_deserializes_from_tagged_json() {
        let change: DraftChange =
            serde_json::from_str(r#"{"field":"billing_cycle","value":"quarterly"}"#).unwrap();
        assert_eq!(change, DraftChange::BillingCycle(Some("quarterly".into())));

        let change: DraftChange = serde_json::from_str(
            r#"{"field":"set_custom_field","value":{"name":"seats","value":12}}"#,
        )
        .unwrap();
        assert_eq!(
            change,
            DraftChange::SetCustomField {
                name: "seats".into(),
                value: FieldValue::Number(12.0),
            }
        );
    }
}
