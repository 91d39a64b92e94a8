mod casing;
