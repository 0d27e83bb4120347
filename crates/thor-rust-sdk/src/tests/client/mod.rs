mod broadcast;
