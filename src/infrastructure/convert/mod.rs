pub mod mediaconvert;
