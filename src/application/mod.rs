// Spin-by-spin backtesting, strategy comparison and reports
pub mod backtest;
