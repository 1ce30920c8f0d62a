use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::Bytes,
};
use log::debug;
use serde_json::Value;

use super::{parse_checked_address, signature::parse_signature_types};
use crate::error::{EncodeError, Result};

/// ABI-encodes the arguments of every command against the parameter types of
/// its signature. The output keeps the input order.
///
/// Fails before encoding anything if the two lists differ in length, and
/// never returns a partial result.
pub fn get_calldatas<S: AsRef<str>>(signatures: &[S], params: &[Vec<Value>]) -> Result<Vec<Bytes>> {
    if signatures.len() != params.len() {
        return Err(EncodeError::LengthMismatch {
            signatures: signatures.len(),
            params: params.len(),
        });
    }

    signatures
        .iter()
        .zip(params)
        .enumerate()
        .map(|(index, (signature, args))| encode_calldata(index, signature.as_ref(), args))
        .collect()
}

/// Encodes one argument list. `index` only labels errors.
pub fn encode_calldata(index: usize, signature: &str, args: &[Value]) -> Result<Bytes> {
    let types = resolve_types(index, signature)?;
    if types.len() != args.len() {
        return Err(EncodeError::ArgumentCount {
            index,
            expected: types.len(),
            got: args.len(),
        });
    }

    let values = types
        .iter()
        .zip(args)
        .map(|(ty, arg)| {
            coerce_arg(ty, arg).map_err(|reason| EncodeError::Coerce {
                index,
                ty: ty.sol_type_name().into_owned(),
                reason,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let encoded = DynSolValue::Tuple(values).abi_encode_params();
    debug!("command {index}: encoded {signature:?} into {} bytes", encoded.len());

    Ok(encoded.into())
}

/// Parses the parameter types of `signature` into ABI types.
pub fn resolve_types(index: usize, signature: &str) -> Result<Vec<DynSolType>> {
    parse_signature_types(signature)?
        .into_iter()
        .map(|ty| DynSolType::parse(&ty).map_err(|_| EncodeError::InvalidType { index, ty }))
        .collect()
}

/// Converts a JSON-like argument into a value of the given ABI type.
///
/// Arrays are matched element by element against array, fixed-array and
/// tuple types. Scalars go through the codec's string coercion, so decimal
/// integers and `"[1,2]"` style arrays are accepted as strings. Address
/// strings must pass checksum validation when written in mixed case. JSON
/// numbers must be exact integers; larger values have to be quoted.
pub fn coerce_arg(ty: &DynSolType, arg: &Value) -> std::result::Result<DynSolValue, String> {
    match (ty, arg) {
        (DynSolType::Array(inner), Value::Array(items)) => items
            .iter()
            .map(|item| coerce_arg(inner, item))
            .collect::<std::result::Result<_, _>>()
            .map(DynSolValue::Array),
        (DynSolType::FixedArray(inner, len), Value::Array(items)) => {
            if items.len() != *len {
                return Err(format!("expected {len} elements, got {}", items.len()));
            }
            items
                .iter()
                .map(|item| coerce_arg(inner, item))
                .collect::<std::result::Result<_, _>>()
                .map(DynSolValue::FixedArray)
        }
        (DynSolType::Tuple(types), Value::Array(items)) => {
            if items.len() != types.len() {
                return Err(format!(
                    "expected {} tuple members, got {}",
                    types.len(),
                    items.len()
                ));
            }
            types
                .iter()
                .zip(items)
                .map(|(ty, item)| coerce_arg(ty, item))
                .collect::<std::result::Result<_, _>>()
                .map(DynSolValue::Tuple)
        }
        (_, Value::Array(_)) => Err("array given for a non-array type".to_string()),
        (DynSolType::Address, Value::String(s)) => parse_checked_address(s).map(DynSolValue::Address),
        (_, Value::String(s)) => ty.coerce_str(s).map_err(|e| e.to_string()),
        (_, Value::Number(n)) => {
            let exact = n
                .as_u64()
                .map(|v| v.to_string())
                .or_else(|| n.as_i64().map(|v| v.to_string()))
                .ok_or_else(|| format!("number {n} is not an exact integer, pass it as a string"))?;
            ty.coerce_str(&exact).map_err(|e| e.to_string())
        }
        (_, Value::Bool(b)) => ty
            .coerce_str(if *b { "true" } else { "false" })
            .map_err(|e| e.to_string()),
        (_, Value::Null) => Err("null argument".to_string()),
        (_, Value::Object(_)) => Err("object arguments are not supported".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};
    use serde_json::json;

    #[test]
    fn test_calldatas_round_trip() {
        let signatures = ["transfer(address,uint256)", "set(uint256 /*id*/, bool)", "pause()"];
        let params = vec![
            vec![json!("0x051100480289e704d20e9db4804837068f3f9204"), json!("1000")],
            vec![json!(7), json!(true)],
            vec![],
        ];

        let calldatas = get_calldatas(&signatures, &params).unwrap();
        assert_eq!(calldatas.len(), 3);

        let decoded = DynSolType::Tuple(vec![DynSolType::Address, DynSolType::Uint(256)])
            .abi_decode_params(&calldatas[0])
            .unwrap();
        assert_eq!(
            decoded,
            DynSolValue::Tuple(vec![
                DynSolValue::Address(address!("051100480289e704d20e9db4804837068f3f9204")),
                DynSolValue::Uint(U256::from(1000), 256),
            ])
        );

        let decoded = DynSolType::Tuple(vec![DynSolType::Uint(256), DynSolType::Bool])
            .abi_decode_params(&calldatas[1])
            .unwrap();
        assert_eq!(
            decoded,
            DynSolValue::Tuple(vec![
                DynSolValue::Uint(U256::from(7), 256),
                DynSolValue::Bool(true),
            ])
        );

        assert!(calldatas[2].is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let signatures = ["pause()", "resume()"];
        let params = vec![vec![], vec![], vec![]];
        assert_eq!(
            get_calldatas(&signatures, &params),
            Err(EncodeError::LengthMismatch {
                signatures: 2,
                params: 3
            })
        );
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let err = get_calldatas(&["setOwner(address)"], &[vec![json!("not-an-address")]]).unwrap_err();
        match err {
            EncodeError::Coerce { index, ty, .. } => {
                assert_eq!(index, 0);
                assert_eq!(ty, "address");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        let result = get_calldatas(
            &["setOwner(address)"],
            &[vec![json!("0x051100480289E704d20e9db4804837068f3f9204")]],
        );
        assert!(matches!(result, Err(EncodeError::Coerce { index: 0, .. })));

        let nested = coerce_arg(
            &DynSolType::parse("address[]").unwrap(),
            &json!(["0x051100480289E704d20e9db4804837068f3f9204"]),
        );
        assert!(nested.is_err());

        let checksummed = address!("051100480289e704d20e9db4804837068f3f9204").to_checksum(None);
        assert!(get_calldatas(&["setOwner(address)"], &[vec![json!(checksummed)]]).is_ok());
    }

    #[test]
    fn test_large_json_number_is_rejected() {
        let params: Vec<Value> = serde_json::from_str("[12345678901234567890123]").unwrap();
        assert!(matches!(
            get_calldatas(&["mint(uint256)"], &[params]),
            Err(EncodeError::Coerce { index: 0, .. })
        ));
        assert!(coerce_arg(&DynSolType::Uint(256), &json!(1.5)).is_err());

        let quoted = coerce_arg(&DynSolType::Uint(256), &json!("12345678901234567890123")).unwrap();
        assert_eq!(
            quoted,
            DynSolValue::Uint(U256::from(12_345_678_901_234_567_890_123u128), 256)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Int(256), &json!(-5)).unwrap(),
            DynSolValue::Int(alloy::primitives::I256::try_from(-5i64).unwrap(), 256)
        );
    }

    #[test]
    fn test_error_names_failing_command() {
        let signatures = ["pause()", "setCap(uint256)"];
        let params = vec![vec![], vec![json!("lots")]];
        assert!(matches!(
            get_calldatas(&signatures, &params),
            Err(EncodeError::Coerce { index: 1, .. })
        ));
    }

    #[test]
    fn test_argument_count_mismatch() {
        assert_eq!(
            encode_calldata(4, "transfer(address,uint256)", &[json!("0x00")]),
            Err(EncodeError::ArgumentCount {
                index: 4,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            encode_calldata(0, "foo(uint257)", &[json!(1)]),
            Err(EncodeError::InvalidType {
                index: 0,
                ty: "uint257".to_string()
            })
        );
    }

    #[test]
    fn test_coerce_nested_arrays_and_tuples() {
        let ty = DynSolType::parse("(address,uint256)[]").unwrap();
        let arg = json!([
            ["0x0000000000000000000000000000000000000001", 1],
            ["0x0000000000000000000000000000000000000002", "16"]
        ]);
        let value = coerce_arg(&ty, &arg).unwrap();
        assert_eq!(
            value,
            DynSolValue::Array(vec![
                DynSolValue::Tuple(vec![
                    DynSolValue::Address(address!("0000000000000000000000000000000000000001")),
                    DynSolValue::Uint(U256::from(1), 256),
                ]),
                DynSolValue::Tuple(vec![
                    DynSolValue::Address(address!("0000000000000000000000000000000000000002")),
                    DynSolValue::Uint(U256::from(16), 256),
                ]),
            ])
        );

        let fixed = DynSolType::parse("uint8[2]").unwrap();
        assert!(coerce_arg(&fixed, &json!([1, 2, 3])).is_err());
        assert!(coerce_arg(&DynSolType::Bool, &json!([true])).is_err());
        assert!(coerce_arg(&DynSolType::Uint(256), &Value::Null).is_err());
    }

    #[test]
    fn test_string_array_argument() {
        let value = coerce_arg(&DynSolType::parse("uint256[]").unwrap(), &json!("[1,2,3]")).unwrap();
        assert_eq!(
            value,
            DynSolValue::Array(vec![
                DynSolValue::Uint(U256::from(1), 256),
                DynSolValue::Uint(U256::from(2), 256),
                DynSolValue::Uint(U256::from(3), 256),
            ])
        );
    }
}
