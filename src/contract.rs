//! Contract variants and the request payload each one sends.
//!
//! The three variants are mutually exclusive and carry their own required
//! fields, so they are modeled as one internally tagged enum. An unknown
//! `kind` fails at config load time instead of leaving the deployer without a
//! request to send.
//!
//! Supplies, token ids and prices are forwarded exactly as configured. A
//! uint256 token id that does not fit a TOML integer is written as a string.

use crate::config::{DisplayConfig, TokenConfig, WalletKey};
use crate::error::DeployError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed decimals sent with every ERC404 deployment.
pub const ERC404_DECIMALS: u8 = 18;

/// Variant-specific deployment parameters (`[token.contract]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind")]
pub enum ContractSpec {
    /// Deploy a new fungible-style ERC404 contract holding the card.
    #[serde(rename = "ERC404")]
    Erc404 {
        name: String,
        ticker: String,
        supply: Value,
    },
    /// Mint into an existing ERC721F contract, optionally owner-only.
    #[serde(rename = "ERC721F")]
    Erc721F {
        contract_address: String,
        token_id: Value,
        #[serde(default)]
        mint_cost: Option<Value>,
        #[serde(default)]
        restrict_to_owner: Option<bool>,
    },
    /// Open mint into an existing ERC721 contract.
    #[serde(rename = "ERC721")]
    Erc721 {
        contract_address: String,
        token_id: Value,
        #[serde(default)]
        mint_price: Option<Value>,
    },
}

impl ContractSpec {
    pub fn kind(&self) -> ContractKind {
        match self {
            Self::Erc404 { .. } => ContractKind::Erc404,
            Self::Erc721F { .. } => ContractKind::Erc721F,
            Self::Erc721 { .. } => ContractKind::Erc721,
        }
    }
}

/// Tag-only view of [`ContractSpec`], used for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Erc404,
    Erc721F,
    Erc721,
}

impl ContractKind {
    /// Path segment naming the contract standard.
    pub fn name(self) -> &'static str {
        match self {
            Self::Erc404 => "ERC404",
            Self::Erc721F => "ERC721F",
            Self::Erc721 => "ERC721",
        }
    }

    /// Backend action performed for this variant.
    pub fn action(self) -> &'static str {
        match self {
            Self::Erc404 => "deploy-contract-1x1",
            Self::Erc721F | Self::Erc721 => "mint-token-1x1",
        }
    }
}

/// Visual fields shared by every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub background: String,
    pub text_color: String,
    pub border_radius: String,
    pub font_family: String,
    pub show_trademark: bool,
    pub show_deployer_address: bool,
}

impl From<&DisplayConfig> for CardStyle {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            background: display.background.clone(),
            text_color: display.text_color.clone(),
            border_radius: display.border_radius.clone(),
            font_family: display.font_family.clone(),
            show_trademark: display.show_trademark,
            show_deployer_address: display.show_deployer_address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc404Payload {
    pub name: String,
    pub ticker: String,
    pub decimals: u8,
    pub supply: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_private_key: Option<WalletKey>,
    pub token_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(flatten)]
    pub style: CardStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721FPayload {
    pub contract_address: String,
    pub token_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_private_key: Option<WalletKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_cost: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub token_text: String,
    #[serde(flatten)]
    pub style: CardStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_to_owner: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Payload {
    pub contract_address: String,
    pub token_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_private_key: Option<WalletKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub token_text: String,
    #[serde(flatten)]
    pub style: CardStyle,
}

/// JSON body for one deployment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeployPayload {
    Erc404(Erc404Payload),
    Erc721F(Erc721FPayload),
    Erc721(Erc721Payload),
}

/// A fully shaped request: route plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub kind: ContractKind,
    pub network: String,
    pub payload: DeployPayload,
}

impl DeployRequest {
    /// Endpoint path relative to the API base URL.
    pub fn path(&self) -> String {
        format!(
            "/api/v1/{}/{}/{}",
            self.kind.name(),
            self.network,
            self.kind.action()
        )
    }
}

/// Shape the request for `config`'s contract variant.
///
/// `token_text` is the joined preview. Fails when no variant is configured.
pub fn build_request(
    config: &TokenConfig,
    token_text: String,
) -> Result<DeployRequest, DeployError> {
    let contract = config.contract.as_ref().ok_or(DeployError::MissingContract)?;
    let style = CardStyle::from(&config.display);
    let wallet_private_key = config.wallet_private_key.clone();
    let metadata = config.metadata.clone();

    let payload = match contract {
        ContractSpec::Erc404 {
            name,
            ticker,
            supply,
        } => DeployPayload::Erc404(Erc404Payload {
            name: name.clone(),
            ticker: ticker.clone(),
            decimals: ERC404_DECIMALS,
            supply: supply.clone(),
            wallet_private_key,
            token_text,
            metadata,
            style,
        }),
        ContractSpec::Erc721F {
            contract_address,
            token_id,
            mint_cost,
            restrict_to_owner,
        } => DeployPayload::Erc721F(Erc721FPayload {
            contract_address: contract_address.clone(),
            token_id: token_id.clone(),
            wallet_private_key,
            mint_cost: mint_cost.clone(),
            metadata,
            token_text,
            style,
            restrict_to_owner: *restrict_to_owner,
        }),
        ContractSpec::Erc721 {
            contract_address,
            token_id,
            mint_price,
        } => DeployPayload::Erc721(Erc721Payload {
            contract_address: contract_address.clone(),
            token_id: token_id.clone(),
            wallet_private_key,
            mint_price: mint_price.clone(),
            metadata,
            token_text,
            style,
        }),
    };

    Ok(DeployRequest {
        kind: contract.kind(),
        network: config.network.clone(),
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_config(contract: Option<ContractSpec>) -> TokenConfig {
        TokenConfig {
            network: "sepolia".to_string(),
            metadata: Some("Metadata info.".to_string()),
            wallet_private_key: Some(WalletKey::new("0xkey")),
            contract,
            ..TokenConfig::default()
        }
    }

    #[test]
    fn erc404_payload_always_sends_18_decimals() {
        let config = token_config(Some(ContractSpec::Erc404 {
            name: "Cert".into(),
            ticker: "CRT".into(),
            supply: 1000.into(),
        }));
        let request = build_request(&config, "a\\nb".into()).expect("request");
        assert_eq!(request.path(), "/api/v1/ERC404/sepolia/deploy-contract-1x1");

        let body = serde_json::to_value(&request.payload).expect("serialize");
        assert_eq!(body["decimals"], json!(18));
        assert_eq!(body["name"], json!("Cert"));
        assert_eq!(body["ticker"], json!("CRT"));
        assert_eq!(body["supply"], json!(1000));
        assert_eq!(body["walletPrivateKey"], json!("0xkey"));
        assert_eq!(body["tokenText"], json!("a\\nb"));
        assert_eq!(body["metadata"], json!("Metadata info."));
        assert_eq!(body["background"], json!("#000000"));
        assert_eq!(body["textColor"], json!("#FFFFFF"));
        assert_eq!(body["showTrademark"], json!(true));
        assert_eq!(body["showDeployerAddress"], json!(false));
        assert!(body.get("restrictToOwner").is_none());
    }

    #[test]
    fn erc721f_payload_carries_owner_restriction() {
        let config = token_config(Some(ContractSpec::Erc721F {
            contract_address: "0xabc".into(),
            token_id: 7.into(),
            mint_cost: Some("0.01".into()),
            restrict_to_owner: Some(true),
        }));
        let request = build_request(&config, "text".into()).expect("request");
        assert_eq!(request.path(), "/api/v1/ERC721F/sepolia/mint-token-1x1");

        let body = serde_json::to_value(&request.payload).expect("serialize");
        assert_eq!(body["contractAddress"], json!("0xabc"));
        assert_eq!(body["tokenId"], json!(7));
        assert_eq!(body["mintCost"], json!("0.01"));
        assert_eq!(body["restrictToOwner"], json!(true));
        assert!(body.get("decimals").is_none());
        assert!(body.get("mintPrice").is_none());
    }

    #[test]
    fn erc721_payload_uses_mint_price() {
        let config = token_config(Some(ContractSpec::Erc721 {
            contract_address: "0xdef".into(),
            token_id: 3.into(),
            mint_price: None,
        }));
        let request = build_request(&config, "text".into()).expect("request");
        assert_eq!(request.path(), "/api/v1/ERC721/sepolia/mint-token-1x1");

        let body = serde_json::to_value(&request.payload).expect("serialize");
        assert_eq!(body["tokenId"], json!(3));
        assert!(body.get("mintPrice").is_none());
        assert!(body.get("restrictToOwner").is_none());
        assert_eq!(body["fontFamily"], json!("'Courier New', Courier, monospace"));
    }

    #[test]
    fn missing_contract_is_an_error() {
        let err = build_request(&token_config(None), String::new()).unwrap_err();
        assert!(matches!(err, DeployError::MissingContract));
    }

    #[test]
    fn contract_spec_parses_tagged_toml() {
        let spec: ContractSpec = toml::from_str(
            r#"
kind = "ERC721F"
contract_address = "0x1"
token_id = 9
restrict_to_owner = false
"#,
        )
        .expect("parse");
        assert_eq!(spec.kind(), ContractKind::Erc721F);
    }

    #[test]
    fn uint256_token_id_and_numeric_cost_pass_through() {
        let max_uint256 =
            "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let spec: ContractSpec = toml::from_str(&format!(
            r#"
kind = "ERC721F"
contract_address = "0x1"
token_id = "{max_uint256}"
mint_cost = 0.001
"#
        ))
        .expect("parse");

        let request = build_request(&token_config(Some(spec)), "t".into()).expect("request");
        let body = serde_json::to_value(&request.payload).expect("serialize");
        assert_eq!(body["tokenId"], json!(max_uint256));
        assert_eq!(body["mintCost"], json!(0.001));
    }

    #[test]
    fn erc721_integer_price_and_token_id_pass_through() {
        let spec: ContractSpec = toml::from_str(
            r#"
kind = "ERC721"
contract_address = "0x2"
token_id = 9223372036854775807
mint_price = 5
"#,
        )
        .expect("parse");

        let request = build_request(&token_config(Some(spec)), "t".into()).expect("request");
        let body = serde_json::to_value(&request.payload).expect("serialize");
        assert_eq!(body["tokenId"], json!(i64::MAX));
        assert_eq!(body["mintPrice"], json!(5));
    }

    #[test]
    fn unknown_contract_kind_is_rejected() {
        let err = toml::from_str::<ContractSpec>("kind = \"ERC20\"\n").unwrap_err();
        assert!(err.to_string().contains("ERC20"), "got: {err}");
    }
}
