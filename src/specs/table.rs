// src/specs/table.rs
//! The static field table: which JSON keys are shown, under which label, in
//! which group, in which order.
//!
//! Rows are `(group, path, label, accessor)`. The accessor is generated by
//! `spec_fields!` from `group.field`, so a row that doesn't match
//! `schema::SpecGroups` fails to compile rather than rendering blank.

use super::schema::SpecGroups;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Network,
    Launch,
    Body,
    Display,
    Platform,
    Memory,
    MainCamera,
    SelfieCamera,
    Sound,
    Comms,
    Features,
    Battery,
    Misc,
    OurTests,
}

use GroupKey::*;

/// Render order.
pub const GROUP_ORDER: [GroupKey; 14] = [
    Network, Launch, Body, Display, Platform, Memory, MainCamera,
    SelfieCamera, Sound, Comms, Features, Battery, Misc, OurTests,
];

impl GroupKey {
    pub fn title(&self) -> &'static str {
        match self {
            Network      => "NETWORK",
            Launch       => "LAUNCH",
            Body         => "BODY",
            Display      => "DISPLAY",
            Platform     => "PLATFORM",
            Memory       => "MEMORY",
            MainCamera   => "MAIN CAMERA",
            SelfieCamera => "SELFIE CAMERA",
            Sound        => "SOUND",
            Comms        => "COMMS",
            Features     => "FEATURES",
            Battery      => "BATTERY",
            Misc         => "MISC",
            OurTests     => "OUR TESTS",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Network      => "📶",
            Launch       => "🗓️",
            Body         => "🛠️",
            Display      => "📱",
            Platform     => "⚙️",
            Memory       => "💾",
            MainCamera   => "📷",
            SelfieCamera => "🤳",
            Sound        => "🔊",
            Comms        => "📡",
            Features     => "💡",
            Battery      => "🔋",
            Misc         => "📦",
            OurTests     => "🧪",
        }
    }

    /// This group's rows, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &'static Field> {
        let key = *self;
        FIELDS.iter().filter(move |f| f.key == key)
    }
}

pub struct Field {
    pub key: GroupKey,
    /// `group.json_key`, e.g. `network.2g_bands`.
    pub path: &'static str,
    pub label: &'static str,
    pub get: fn(&SpecGroups) -> Option<&str>,
}

impl Field {
    pub fn value<'a>(&self, specs: &'a SpecGroups) -> Option<&'a str> {
        (self.get)(specs)
    }
}

pub static FIELDS: &[Field] = spec_fields! {
    Network      => network.technology       as "technology",    "Technology";
    Network      => network.bands_2g         as "2g_bands",      "2G Bands";
    Network      => network.bands_3g         as "3g_bands",      "3G Bands";
    Network      => network.bands_4g         as "4g_bands",      "4G Bands";
    Network      => network.bands_5g         as "5g_bands",      "5G Bands";
    Network      => network.speed            as "speed",         "Speed";
    Launch       => launch.announced         as "announced",     "Announced";
    Launch       => launch.status            as "status",        "Status";
    Body         => body.dimensions          as "dimensions",    "Dimensions";
    Body         => body.weight              as "weight",        "Weight";
    Body         => body.build               as "build",         "Build";
    Body         => body.sim                 as "sim",           "SIM";
    Display      => display.kind             as "type",          "Type";
    Display      => display.size             as "size",          "Size";
    Display      => display.resolution       as "resolution",    "Resolution";
    Display      => display.protection       as "protection",    "Protection";
    Platform     => platform.os              as "os",            "OS";
    Platform     => platform.chipset         as "chipset",       "Chipset";
    Platform     => platform.cpu             as "cpu",           "CPU";
    Platform     => platform.gpu             as "gpu",           "GPU";
    Memory       => memory.card_slot         as "card_slot",     "Card Slot";
    Memory       => memory.internal          as "internal",      "Internal";
    MainCamera   => main_camera.dual         as "dual",          "Specs";
    MainCamera   => main_camera.features     as "features",      "Features";
    MainCamera   => main_camera.video        as "video",         "Video";
    SelfieCamera => selfie_camera.single     as "single",        "Specs";
    SelfieCamera => selfie_camera.video      as "video",         "Video";
    Sound        => sound.loudspeaker        as "loudspeaker",   "Loudspeaker";
    Sound        => sound.jack_3_5mm         as "3_5mm_jack",    "3.5mm Jack";
    Comms        => comms.wlan               as "wlan",          "WLAN";
    Comms        => comms.bluetooth          as "bluetooth",     "Bluetooth";
    Comms        => comms.positioning        as "positioning",   "GPS";
    Comms        => comms.nfc                as "nfc",           "NFC";
    Comms        => comms.infrared_port      as "infrared_port", "Infrared";
    Comms        => comms.radio              as "radio",         "Radio";
    Comms        => comms.usb                as "usb",           "USB";
    Features     => features.sensors         as "sensors",       "Sensors";
    Battery      => battery.kind             as "type",          "Type";
    Battery      => battery.charging         as "charging",      "Charging";
    Misc         => misc.colors              as "colors",        "Colors";
    Misc         => misc.models              as "models",        "Models";
    Misc         => misc.price               as "price",         "Price";
    OurTests     => our_tests.performance    as "performance",   "Performance";
    OurTests     => our_tests.display        as "display",       "Display";
    OurTests     => our_tests.loudspeaker    as "loudspeaker",   "Loudspeaker";
    OurTests     => our_tests.battery        as "battery",       "Battery";
};
