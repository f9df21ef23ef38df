use eekit_core::{BandRole, CircuitMode, ColorBand, RcParameters, ResistorList, ResistorSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Tab {
    Decoder,
    Network,
    Rc,
}

const TABS: [Tab; 3] = [Tab::Decoder, Tab::Network, Tab::Rc];

impl Tab {
    pub fn next(self) -> Tab {
        let idx = self as usize;
        TABS[(idx + 1) % TABS.len()]
    }

    pub fn prev(self) -> Tab {
        let idx = self as usize;
        TABS[(idx + TABS.len() - 1) % TABS.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Decoder => "decoder",
            Tab::Network => "network",
            Tab::Rc => "rc",
        }
    }
}

#[derive(Debug, Default)]
pub struct DecoderState {
    pub spec: ResistorSpec,
    pub selected: usize,
}

impl DecoderState {
    pub fn selected_role(&self) -> BandRole {
        BandRole::ALL[self.selected]
    }

    /// Steps the selected band through the colors valid for its role.
    pub fn cycle(&mut self, forward: bool) {
        let role = self.selected_role();
        let choices: Vec<ColorBand> = ColorBand::choices(role).collect();
        let current = self.spec.band(role);
        let idx = choices.iter().position(|&b| b == current).unwrap_or(0);
        let len = choices.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.spec.set_band(role, choices[next]);
    }
}

#[derive(Debug, Default)]
pub struct NetworkState {
    pub list: ResistorList,
    pub mode: CircuitMode,
    pub selected: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RcField {
    Capacitance,
    Resistance,
    InitialVoltage,
    TargetVoltage,
}

pub const RC_FIELDS: [RcField; 4] = [
    RcField::Capacitance,
    RcField::Resistance,
    RcField::InitialVoltage,
    RcField::TargetVoltage,
];

impl RcField {
    pub fn label(self) -> &'static str {
        match self {
            RcField::Capacitance => "Capacitance (F)",
            RcField::Resistance => "Resistance (Ω)",
            RcField::InitialVoltage => "Initial Voltage (V)",
            RcField::TargetVoltage => "Target Voltage (V)",
        }
    }
}

#[derive(Debug, Default)]
pub struct RcState {
    pub fields: [String; 4],
    pub selected: usize,
}

impl RcState {
    pub fn parameters(&self) -> RcParameters {
        let [c, r, vi, vf] = &self.fields;
        RcParameters::parse(c, r, vi, vf)
    }
}

#[derive(Debug)]
pub struct App {
    pub tab: Tab,
    pub decoder: DecoderState,
    pub network: NetworkState,
    pub rc: RcState,
    pub show_help: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::Decoder,
            decoder: DecoderState::default(),
            network: NetworkState::default(),
            rc: RcState::default(),
            show_help: false,
            status: None,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
