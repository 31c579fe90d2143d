//! Vehicle and its Car specialization. Car embeds a Vehicle and delegates to
//! it rather than overriding anything, so it is a plain capability superset.

#[derive(Debug, Clone)]
pub struct Vehicle {
    make: String,
    pub year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn description(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }

    /// Writes the description line to the diagnostic stream.
    pub fn describe(&self) {
        eprintln!("{}", self.description());
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn year(&self) -> i32 {
        self.vehicle.year
    }

    pub fn description(&self) -> String {
        self.vehicle.description()
    }

    /// Same line a bare Vehicle would emit.
    pub fn describe(&self) {
        self.vehicle.describe();
    }

    pub fn model_description(&self) -> String {
        format!("Model: {}", self.model)
    }

    pub fn describe_model(&self) {
        eprintln!("{}", self.model_description());
    }
}
