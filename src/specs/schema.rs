// src/specs/schema.rs
//! Typed shape of the lookup API's JSON body.
//!
//! Every spec value is `Option<String>`: `null` or a missing key both mean
//! "absent". Anything else that isn't a string (a number, an object) is a
//! schema mismatch and fails the whole parse. Unknown keys are ignored.

use serde::{ Deserialize, Serialize };

#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<DeviceData>,
}

/// `data` as sent: title/image may be missing on sparse results.
#[derive(Clone, Debug, Deserialize)]
pub struct DeviceData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub specs: Option<SpecGroups>,
}

/// One successful lookup, ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceResult {
    pub title: String,
    pub image: String,
    pub specs: SpecGroups,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecGroups {
    pub network: Option<Network>,
    pub launch: Option<Launch>,
    pub body: Option<Body>,
    pub display: Option<Display>,
    pub platform: Option<Platform>,
    pub memory: Option<Memory>,
    pub main_camera: Option<MainCamera>,
    pub selfie_camera: Option<SelfieCamera>,
    pub sound: Option<Sound>,
    pub comms: Option<Comms>,
    pub features: Option<Features>,
    pub battery: Option<Battery>,
    pub misc: Option<Misc>,
    pub our_tests: Option<OurTests>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub technology: Option<String>,
    #[serde(rename = "2g_bands")]
    pub bands_2g: Option<String>,
    #[serde(rename = "3g_bands")]
    pub bands_3g: Option<String>,
    #[serde(rename = "4g_bands")]
    pub bands_4g: Option<String>,
    #[serde(rename = "5g_bands")]
    pub bands_5g: Option<String>,
    pub speed: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Launch {
    pub announced: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub build: Option<String>,
    pub sim: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<String>,
    pub resolution: Option<String>,
    pub protection: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub os: Option<String>,
    pub chipset: Option<String>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
    pub card_slot: Option<String>,
    pub internal: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainCamera {
    pub dual: Option<String>,
    pub features: Option<String>,
    pub video: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfieCamera {
    pub single: Option<String>,
    pub video: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub loudspeaker: Option<String>,
    #[serde(rename = "3_5mm_jack")]
    pub jack_3_5mm: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comms {
    pub wlan: Option<String>,
    pub bluetooth: Option<String>,
    pub positioning: Option<String>,
    pub nfc: Option<String>,
    pub infrared_port: Option<String>,
    pub radio: Option<String>,
    pub usb: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub sensors: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Battery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub charging: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Misc {
    pub colors: Option<String>,
    pub models: Option<String>,
    pub price: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OurTests {
    pub performance: Option<String>,
    pub display: Option<String>,
    pub loudspeaker: Option<String>,
    pub battery: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_renamed_keys() {
        let body = r#"{
            "success": true,
            "data": {
                "title": "Phone",
                "image": "https://img.test/p.jpg",
                "specs": {
                    "network": { "technology": "GSM / LTE", "2g_bands": "GSM 900", "extra": "ignored" },
                    "display": { "type": "OLED", "size": null },
                    "sound": { "3_5mm_jack": "Yes" }
                }
            }
        }"#;
        let r: ApiResponse = serde_json::from_str(body).unwrap();
        let specs = r.data.unwrap().specs.unwrap();
        let net = specs.network.unwrap();
        assert_eq!(net.bands_2g.as_deref(), Some("GSM 900"));
        assert_eq!(net.bands_5g, None);
        let disp = specs.display.unwrap();
        assert_eq!(disp.kind.as_deref(), Some("OLED"));
        assert_eq!(disp.size, None);
        assert_eq!(specs.sound.unwrap().jack_3_5mm.as_deref(), Some("Yes"));
        assert!(specs.battery.is_none());
    }

    #[test]
    fn numeric_value_is_a_schema_mismatch() {
        let body = r#"{ "success": true, "data": { "title": "X", "specs": { "misc": { "price": 199 } } } }"#;
        assert!(serde_json::from_str::<ApiResponse>(body).is_err());
    }

    #[test]
    fn missing_success_flag_is_a_schema_mismatch() {
        assert!(serde_json::from_str::<ApiResponse>(r#"{ "data": null }"#).is_err());
    }
}
