pub mod configuration;

pub mod dataset {
    pub mod dataseterror;
    pub mod dataset;
}

pub mod distance {
    pub mod distanceerror;
    pub mod areadistance;
    pub mod pointwisedistance;
    pub mod distancekind;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod interpolationerror;
        pub mod linesegment;
        pub mod linearinterpolant;
    }
}

pub mod timeseries {
    pub mod sample;
    pub mod sampleserieserror;
    pub mod sampleseries;
}
