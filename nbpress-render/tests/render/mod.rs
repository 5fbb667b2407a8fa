mod properties;
mod sections;
