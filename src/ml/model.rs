use burn::{
    nn::{
        loss::{MseLoss, Reduction},
        Linear, LinearConfig,
    },
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct LinearRegressionConfig {
    #[config(default = 1)]
    pub d_input:  usize,
    #[config(default = 1)]
    pub d_output: usize,
}

impl LinearRegressionConfig {
    /// Build an untrained model on `device`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> LinearRegression<B> {
        // Weight [d_input, d_output] and bias [d_output], both freshly initialised
        let linear = LinearConfig::new(self.d_input, self.d_output)
            .with_bias(true)
            .init(device);
        LinearRegression { linear }
    }
}

/// One dense unit: y = x·w + b.
#[derive(Module, Debug)]
pub struct LinearRegression<B: Backend> {
    pub linear: Linear<B>,
}

/// Untrained 1 → 1 model.
pub fn create_model<B: Backend>(device: &B::Device) -> LinearRegression<B> {
    LinearRegressionConfig::new().init(device)
}

impl<B: Backend> LinearRegression<B> {
    /// inputs: [n, 1] → predictions: [n, 1]
    pub fn forward(&self, inputs: Tensor<B, 2>) -> Tensor<B, 2> {
        self.linear.forward(inputs)
    }

    /// Mean squared error of the predictions against `targets` ([n, 1] each).
    pub fn forward_loss(&self, inputs: Tensor<B, 2>, targets: Tensor<B, 2>) -> Tensor<B, 1> {
        let predictions = self.forward(inputs);
        // Reduction::Mean → mean of squared residuals over all n rows
        MseLoss::new().forward(predictions, targets, Reduction::Mean)
    }

    /// The learned slope. The weight tensor is [1, 1], so it holds one scalar.
    pub fn weight(&self) -> f32 {
        self.linear.weight.val().into_scalar().elem::<f32>()
    }

    /// 0.0 when the layer was built without a bias.
    pub fn bias(&self) -> f32 {
        self.linear
            .bias
            .as_ref()
            .map(|b| b.val().into_scalar().elem::<f32>())
            .unwrap_or(0.0)
    }
}
