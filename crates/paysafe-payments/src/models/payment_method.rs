//! Payment-method attachment for handles and vault instruments.
//!
//! On the wire each payment method lives under its own top-level key
//! (`card`, `applePay`, `skrill`, ...), with at most one populated per
//! payload. [`PaymentMethod`] is the one-of view used to build requests;
//! [`PaymentMethodSlot`] is the flattened wire container embedded in the
//! parent payloads. Attaching a second method is rejected instead of
//! silently keeping both.

use serde::{Deserialize, Serialize};

use paysafe_core::errors::{Error, Result};

use super::card::Card;
use super::lpm::{
    Ach, Bacs, Eft, Interac, Mazooma, Neteller, PayByBank, Paypal, Paysafecard, Paysafecash,
    RapidTransfer, SafetyPayCash, Sepa, Sightline, Skrill, Skrill1Tap, Venmo, Vippreferred,
};
use super::wallets::{ApplePay, GooglePay};

/// One payment method, by vendor variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Card(Card),
    ApplePay(ApplePay),
    GooglePay(GooglePay),
    Skrill(Skrill),
    Neteller(Neteller),
    Paysafecash(Paysafecash),
    Paysafecard(Paysafecard),
    Paypal(Paypal),
    Venmo(Venmo),
    Vippreferred(Vippreferred),
    Mazooma(Mazooma),
    Sightline(Sightline),
    PayByBank(PayByBank),
    InteracETransfer(Interac),
    RapidTransfer(RapidTransfer),
    Skrill1Tap(Skrill1Tap),
    Ach(Ach),
    Eft(Eft),
    Bacs(Bacs),
    Sepa(Sepa),
    SafetyPayCash(SafetyPayCash),
}

impl PaymentMethod {
    /// Wire key this method serializes under.
    pub fn wire_key(&self) -> &'static str {
        match self {
            PaymentMethod::Card(_) => "card",
            PaymentMethod::ApplePay(_) => "applePay",
            PaymentMethod::GooglePay(_) => "googlePay",
            PaymentMethod::Skrill(_) => "skrill",
            PaymentMethod::Neteller(_) => "neteller",
            PaymentMethod::Paysafecash(_) => "paysafecash",
            PaymentMethod::Paysafecard(_) => "paysafecard",
            PaymentMethod::Paypal(_) => "payPal",
            PaymentMethod::Venmo(_) => "venmo",
            PaymentMethod::Vippreferred(_) => "vippreferred",
            PaymentMethod::Mazooma(_) => "mazooma",
            PaymentMethod::Sightline(_) => "sightline",
            PaymentMethod::PayByBank(_) => "payByBank",
            PaymentMethod::InteracETransfer(_) => "interacETransfer",
            PaymentMethod::RapidTransfer(_) => "rapidTransfer",
            PaymentMethod::Skrill1Tap(_) => "skrill1Tap",
            PaymentMethod::Ach(_) => "ach",
            PaymentMethod::Eft(_) => "eft",
            PaymentMethod::Bacs(_) => "bacs",
            PaymentMethod::Sepa(_) => "sepa",
            PaymentMethod::SafetyPayCash(_) => "safetyPayCash",
        }
    }
}

/// Flattened wire container holding at most one payment method.
///
/// Parent payloads embed this with `#[serde(flatten)]`, so the populated
/// variant serializes as a sibling of the parent's own attributes. Inbound
/// documents that carry several variant keys still deserialize (the server
/// owns that shape); outbound construction goes through [`attach`] or
/// `From<PaymentMethod>`, which keep the slot single-occupancy.
///
/// [`attach`]: PaymentMethodSlot::attach
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_pay: Option<ApplePay>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_pay: Option<GooglePay>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skrill: Option<Skrill>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub neteller: Option<Neteller>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paysafecash: Option<Paysafecash>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paysafecard: Option<Paysafecard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_pal: Option<Paypal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venmo: Option<Venmo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vippreferred: Option<Vippreferred>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mazooma: Option<Mazooma>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sightline: Option<Sightline>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_by_bank: Option<PayByBank>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interac_e_transfer: Option<Interac>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rapid_transfer: Option<RapidTransfer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skrill1_tap: Option<Skrill1Tap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach: Option<Ach>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eft: Option<Eft>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacs: Option<Bacs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa: Option<Sepa>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_pay_cash: Option<SafetyPayCash>,
}

impl PaymentMethodSlot {
    pub fn new() -> Self {
        PaymentMethodSlot::default()
    }

    /// Wire key of the populated variant, if any.
    pub fn kind(&self) -> Option<&'static str> {
        if self.card.is_some() {
            Some("card")
        } else if self.apple_pay.is_some() {
            Some("applePay")
        } else if self.google_pay.is_some() {
            Some("googlePay")
        } else if self.skrill.is_some() {
            Some("skrill")
        } else if self.neteller.is_some() {
            Some("neteller")
        } else if self.paysafecash.is_some() {
            Some("paysafecash")
        } else if self.paysafecard.is_some() {
            Some("paysafecard")
        } else if self.pay_pal.is_some() {
            Some("payPal")
        } else if self.venmo.is_some() {
            Some("venmo")
        } else if self.vippreferred.is_some() {
            Some("vippreferred")
        } else if self.mazooma.is_some() {
            Some("mazooma")
        } else if self.sightline.is_some() {
            Some("sightline")
        } else if self.pay_by_bank.is_some() {
            Some("payByBank")
        } else if self.interac_e_transfer.is_some() {
            Some("interacETransfer")
        } else if self.rapid_transfer.is_some() {
            Some("rapidTransfer")
        } else if self.skrill1_tap.is_some() {
            Some("skrill1Tap")
        } else if self.ach.is_some() {
            Some("ach")
        } else if self.eft.is_some() {
            Some("eft")
        } else if self.bacs.is_some() {
            Some("bacs")
        } else if self.sepa.is_some() {
            Some("sepa")
        } else if self.safety_pay_cash.is_some() {
            Some("safetyPayCash")
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind().is_none()
    }

    /// Attaches `method`, failing with [`Error::ConflictingVariant`] when a
    /// variant is already present (including the same one).
    pub fn attach(&mut self, method: PaymentMethod) -> Result<()> {
        if let Some(existing) = self.kind() {
            return Err(Error::ConflictingVariant {
                existing,
                rejected: method.wire_key(),
            });
        }
        self.set(method);
        Ok(())
    }

    fn set(&mut self, method: PaymentMethod) {
        match method {
            PaymentMethod::Card(v) => self.card = Some(v),
            PaymentMethod::ApplePay(v) => self.apple_pay = Some(v),
            PaymentMethod::GooglePay(v) => self.google_pay = Some(v),
            PaymentMethod::Skrill(v) => self.skrill = Some(v),
            PaymentMethod::Neteller(v) => self.neteller = Some(v),
            PaymentMethod::Paysafecash(v) => self.paysafecash = Some(v),
            PaymentMethod::Paysafecard(v) => self.paysafecard = Some(v),
            PaymentMethod::Paypal(v) => self.pay_pal = Some(v),
            PaymentMethod::Venmo(v) => self.venmo = Some(v),
            PaymentMethod::Vippreferred(v) => self.vippreferred = Some(v),
            PaymentMethod::Mazooma(v) => self.mazooma = Some(v),
            PaymentMethod::Sightline(v) => self.sightline = Some(v),
            PaymentMethod::PayByBank(v) => self.pay_by_bank = Some(v),
            PaymentMethod::InteracETransfer(v) => self.interac_e_transfer = Some(v),
            PaymentMethod::RapidTransfer(v) => self.rapid_transfer = Some(v),
            PaymentMethod::Skrill1Tap(v) => self.skrill1_tap = Some(v),
            PaymentMethod::Ach(v) => self.ach = Some(v),
            PaymentMethod::Eft(v) => self.eft = Some(v),
            PaymentMethod::Bacs(v) => self.bacs = Some(v),
            PaymentMethod::Sepa(v) => self.sepa = Some(v),
            PaymentMethod::SafetyPayCash(v) => self.safety_pay_cash = Some(v),
        }
    }
}

impl From<PaymentMethod> for PaymentMethodSlot {
    fn from(method: PaymentMethod) -> Self {
        let mut slot = PaymentMethodSlot::default();
        slot.set(method);
        slot
    }
}

impl From<Card> for PaymentMethod {
    fn from(v: Card) -> Self {
        PaymentMethod::Card(v)
    }
}

impl From<ApplePay> for PaymentMethod {
    fn from(v: ApplePay) -> Self {
        PaymentMethod::ApplePay(v)
    }
}

impl From<GooglePay> for PaymentMethod {
    fn from(v: GooglePay) -> Self {
        PaymentMethod::GooglePay(v)
    }
}

impl From<Skrill> for PaymentMethod {
    fn from(v: Skrill) -> Self {
        PaymentMethod::Skrill(v)
    }
}

impl From<Neteller> for PaymentMethod {
    fn from(v: Neteller) -> Self {
        PaymentMethod::Neteller(v)
    }
}

impl From<Paysafecash> for PaymentMethod {
    fn from(v: Paysafecash) -> Self {
        PaymentMethod::Paysafecash(v)
    }
}

impl From<Paysafecard> for PaymentMethod {
    fn from(v: Paysafecard) -> Self {
        PaymentMethod::Paysafecard(v)
    }
}

impl From<Paypal> for PaymentMethod {
    fn from(v: Paypal) -> Self {
        PaymentMethod::Paypal(v)
    }
}

impl From<Venmo> for PaymentMethod {
    fn from(v: Venmo) -> Self {
        PaymentMethod::Venmo(v)
    }
}

impl From<Vippreferred> for PaymentMethod {
    fn from(v: Vippreferred) -> Self {
        PaymentMethod::Vippreferred(v)
    }
}

impl From<Mazooma> for PaymentMethod {
    fn from(v: Mazooma) -> Self {
        PaymentMethod::Mazooma(v)
    }
}

impl From<Sightline> for PaymentMethod {
    fn from(v: Sightline) -> Self {
        PaymentMethod::Sightline(v)
    }
}

impl From<PayByBank> for PaymentMethod {
    fn from(v: PayByBank) -> Self {
        PaymentMethod::PayByBank(v)
    }
}

impl From<Interac> for PaymentMethod {
    fn from(v: Interac) -> Self {
        PaymentMethod::InteracETransfer(v)
    }
}

impl From<RapidTransfer> for PaymentMethod {
    fn from(v: RapidTransfer) -> Self {
        PaymentMethod::RapidTransfer(v)
    }
}

impl From<Skrill1Tap> for PaymentMethod {
    fn from(v: Skrill1Tap) -> Self {
        PaymentMethod::Skrill1Tap(v)
    }
}

impl From<Ach> for PaymentMethod {
    fn from(v: Ach) -> Self {
        PaymentMethod::Ach(v)
    }
}

impl From<Eft> for PaymentMethod {
    fn from(v: Eft) -> Self {
        PaymentMethod::Eft(v)
    }
}

impl From<Bacs> for PaymentMethod {
    fn from(v: Bacs) -> Self {
        PaymentMethod::Bacs(v)
    }
}

impl From<Sepa> for PaymentMethod {
    fn from(v: Sepa) -> Self {
        PaymentMethod::Sepa(v)
    }
}

impl From<SafetyPayCash> for PaymentMethod {
    fn from(v: SafetyPayCash) -> Self {
        PaymentMethod::SafetyPayCash(v)
    }
}
