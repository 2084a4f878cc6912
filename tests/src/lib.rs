#[cfg(test)]
mod formulas;
#[cfg(test)]
mod report;
