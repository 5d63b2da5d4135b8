use serde_json::Value;

/// Positional data forwarded verbatim to the url handler and to every
/// listener of the triggered event.
pub type Payload = Vec<Value>;

/// Conversion into a trigger payload. Stands in for trailing variadic
/// arguments: unit means "no data", scalars become a single-element
/// payload, arrays and tuples collect in order.
pub trait IntoPayload {
    fn into_payload(self) -> Payload;
}

impl IntoPayload for () {
    fn into_payload(self) -> Payload {
        Vec::new()
    }
}

impl IntoPayload for Payload {
    fn into_payload(self) -> Payload {
        self
    }
}

impl IntoPayload for Value {
    fn into_payload(self) -> Payload {
        vec![self]
    }
}

impl<T: Into<Value>, const N: usize> IntoPayload for [T; N] {
    fn into_payload(self) -> Payload {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! scalar_into_payload {
    ($($ty:ty),+) => {
        $(impl IntoPayload for $ty {
            fn into_payload(self) -> Payload {
                vec![Value::from(self)]
            }
        })+
    };
}

scalar_into_payload!(bool, i32, i64, u32, u64, f64, &str, String);

impl<A: Into<Value>, B: Into<Value>> IntoPayload for (A, B) {
    fn into_payload(self) -> Payload {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> IntoPayload for (A, B, C) {
    fn into_payload(self) -> Payload {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>, D: Into<Value>> IntoPayload for (A, B, C, D) {
    fn into_payload(self) -> Payload {
        vec![self.0.into(), self.1.into(), self.2.into(), self.3.into()]
    }
}
