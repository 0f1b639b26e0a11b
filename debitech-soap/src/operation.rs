use crate::errors::api_error::ApiError;
use std::fmt;
use std::str::FromStr;

/// The DebiTech operation table. Each row is the variant, the Rust method name, the accepted spellings
/// (the first one is the remote operation name) and the positional parameter order.
///
/// The callback macro receives the whole table, so the [Operation] enum and the per-operation methods
/// on the clients are all generated from this single list.
macro_rules! for_each_operation {
    ($callback:ident) => {
        $callback! {
            Settle, settle,
                ["settle"],
                ["verifyID", "transID", "amount", "extra"];
            SubscribeAndSettle, subscribe_and_settle,
                ["subscribeAndSettle", "subscribe_and_settle"],
                ["verifyID", "transID", "data", "ip", "extra"];
            Authorize, authorize,
                ["authorize"],
                ["billingFirstName", "billingLastName", "billingAddress", "billingCity",
                 "billingCountry", "cc", "expM", "expY", "eMail", "ip", "data", "currency", "transID", "extra"];
            AuthorizeAndSettle3ds, authorize_and_settle_3ds,
                ["authorizeAndSettle3DS", "authorize_and_settle_3ds"],
                ["verifyID", "paRes", "extra"];
            Refund, refund,
                ["refund"],
                ["verifyID", "transID", "amount", "extra"];
            AskIf3dsEnrolled, ask_if_3ds_enrolled,
                ["askIf3DSEnrolled", "ask_if_3ds_enrolled"],
                ["billingFirstName", "billingLastName", "billingAddress", "billingCity",
                 "billingCountry", "cc", "expM", "expY", "eMail", "ip", "data", "currency", "transID",
                 "httpAcceptHeader", "httpUserAgentHeader", "method", "referenceNo", "extra"];
            AuthReversal, auth_reversal,
                ["authReversal", "auth_reversal"],
                ["verifyID", "amount", "transID", "extra"];
            Authorize3ds, authorize_3ds,
                ["authorize3DS", "authorize_3ds"],
                ["verifyID", "paRes", "extra"];
            Subscribe, subscribe,
                ["subscribe"],
                ["verifyID", "transID", "data", "ip", "extra"];
            AuthorizeAndSettle, authorize_and_settle,
                ["authorizeAndSettle", "authorize_and_settle"],
                ["billingFirstName", "billingLastName", "billingAddress", "billingCity", "billingCountry",
                 "cc", "expM", "expY", "eMail", "ip", "data", "currency", "transID", "extra"];
        }
    };
}

pub(crate) use for_each_operation;

macro_rules! define_operations {
    ($(
        $variant:ident, $method:ident,
            [$remote:literal $(, $alias:literal)*],
            [$($param:literal),* $(,)?];
    )*) => {
        /// Remote operations offered by the DebiTech SOAP service.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// Operation name as the SOAP service knows it.
            pub fn remote_name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $remote,)*
                }
            }

            /// Every name this operation can be called by, remote name first.
            pub fn spellings(self) -> &'static [&'static str] {
                match self {
                    $(Operation::$variant => &[$remote $(, $alias)*],)*
                }
            }

            /// Parameter names in the order positional arguments are assigned to them.
            pub fn parameters(self) -> &'static [&'static str] {
                match self {
                    $(Operation::$variant => &[$($param),*],)*
                }
            }

            /// Looks an operation up by any of its accepted spellings.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($remote $(| $alias)* => Some(Operation::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_operation!(define_operations);

impl FromStr for Operation {
    type Err = ApiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| ApiError::UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.remote_name())
    }
}
